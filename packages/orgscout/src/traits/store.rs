//! Organization persistence trait.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{
    ein::Ein,
    organization::{NewOrganization, Organization},
};

/// Persistence for organizations keyed by EIN.
///
/// The EIN must be unique in the backing store, and `create` must fail with
/// [`crate::StoreError::Duplicate`] when it collides, so that concurrent
/// resolvers can detect that someone else created the record first.
#[async_trait]
pub trait OrganizationStore: Send + Sync {
    /// Look up an organization by EIN. A miss is `Ok(None)`.
    async fn find_by_ein(&self, ein: &Ein) -> StoreResult<Option<Organization>>;

    /// Insert a new organization.
    async fn create(&self, organization: NewOrganization) -> StoreResult<Organization>;
}

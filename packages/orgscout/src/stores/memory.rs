//! In-memory organization store for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::store::OrganizationStore;
use crate::types::{
    ein::Ein,
    organization::{NewOrganization, Organization},
};

/// In-memory organizations keyed by EIN.
///
/// Enforces EIN uniqueness like the database-backed store does. Data is
/// lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    organizations: RwLock<HashMap<Ein, Organization>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored organizations.
    pub fn len(&self) -> usize {
        self.organizations.read().unwrap().len()
    }

    /// True when nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrganizationStore for MemoryStore {
    async fn find_by_ein(&self, ein: &Ein) -> StoreResult<Option<Organization>> {
        Ok(self.organizations.read().unwrap().get(ein).cloned())
    }

    async fn create(&self, organization: NewOrganization) -> StoreResult<Organization> {
        let mut organizations = self.organizations.write().unwrap();

        if organizations.contains_key(&organization.ein) {
            return Err(StoreError::Duplicate {
                ein: organization.ein.to_string(),
            });
        }

        let created = organization.into_organization();
        organizations.insert(created.ein.clone(), created.clone());
        Ok(created)
    }
}

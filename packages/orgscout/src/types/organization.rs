//! Organization record keyed by EIN.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ein::Ein, profile::ExtractedProfile};

/// A persisted nonprofit organization.
///
/// Exactly one per EIN. Descriptive fields are optional because they come
/// from model output, which may omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub ein: Ein,
    pub name: Option<String>,
    pub website_url: Option<String>,
    /// Page the profile was extracted from
    pub profile_url: String,
    /// NTEE category code, e.g. "P20"
    pub ntee_code: Option<String>,
    pub ntee_description: Option<String>,
    pub zip_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields handed to [`crate::OrganizationStore::create`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrganization {
    pub ein: Ein,
    pub name: Option<String>,
    pub website_url: Option<String>,
    pub profile_url: String,
    pub ntee_code: Option<String>,
    pub ntee_description: Option<String>,
    pub zip_code: Option<String>,
}

impl NewOrganization {
    /// Combine an extracted profile with the identity it was resolved for.
    pub fn from_profile(ein: Ein, profile_url: impl Into<String>, profile: ExtractedProfile) -> Self {
        Self {
            ein,
            name: profile.name,
            website_url: profile.website_url,
            profile_url: profile_url.into(),
            ntee_code: profile.ntee_code,
            ntee_description: profile.ntee_description,
            zip_code: profile.zip_code,
        }
    }

    /// Materialize into a record with a fresh id and timestamp.
    pub fn into_organization(self) -> Organization {
        Organization {
            id: Uuid::now_v7(),
            ein: self.ein,
            name: self.name,
            website_url: self.website_url,
            profile_url: self.profile_url,
            ntee_code: self.ntee_code,
            ntee_description: self.ntee_description,
            zip_code: self.zip_code,
            created_at: Utc::now(),
        }
    }
}

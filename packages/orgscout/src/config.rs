//! Configuration types for resolution and model selection.

use serde::{Deserialize, Serialize};

use crate::types::ein::Ein;

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Where organization profiles are read from. `{ein}` is replaced by the
/// nine EIN digits.
pub const DEFAULT_PROFILE_URL_TEMPLATE: &str =
    "https://projects.propublica.org/nonprofits/organizations/{ein}";

/// Configuration for the organization resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Profile source URL template.
    ///
    /// Must contain `{ein}`. Default: ProPublica Nonprofit Explorer.
    pub profile_url_template: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            profile_url_template: DEFAULT_PROFILE_URL_TEMPLATE.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile URL template.
    pub fn with_profile_url_template(mut self, template: impl Into<String>) -> Self {
        self.profile_url_template = template.into();
        self
    }

    /// Profile source URL for an EIN.
    pub fn profile_url(&self, ein: &Ein) -> String {
        self.profile_url_template.replace("{ein}", ein.digits())
    }
}

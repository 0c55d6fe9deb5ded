use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use orgscout::{ResolverConfig, DEFAULT_MODEL};

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// Absent means an in-memory store for the lifetime of the process
    pub database_url: Option<String>,
    pub openai_model: String,
    pub profile_url_template: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?,
            database_url: non_empty("DATABASE_URL"),
            openai_model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            profile_url_template: non_empty("PROFILE_URL_TEMPLATE"),
        })
    }

    pub fn resolver_config(&self) -> Result<ResolverConfig> {
        let Some(template) = &self.profile_url_template else {
            return Ok(ResolverConfig::default());
        };

        anyhow::ensure!(
            template.contains("{ein}"),
            "PROFILE_URL_TEMPLATE must contain {{ein}}, got {}",
            template
        );
        Ok(ResolverConfig::new().with_profile_url_template(template.clone()))
    }
}

fn non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

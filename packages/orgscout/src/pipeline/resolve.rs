//! Organization resolver - get-or-create by EIN.
//!
//! ```text
//! LOOKUP ─┬─ HIT ───────────────────────────────────► return
//!         └─ MISS ─► FETCH_PROFILE ─► EXTRACT ─► PERSIST ─► return
//! ```
//!
//! Nothing is written until extraction succeeds, so a failed fetch or a
//! malformed model answer never leaves a partial record behind.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::config::ResolverConfig;
use crate::error::{ExtractionError, Result, StoreError};
use crate::pipeline::profile::ProfileExtractor;
use crate::traits::{fetcher::ContentFetcher, store::OrganizationStore};
use crate::types::{
    ein::Ein,
    organization::{NewOrganization, Organization},
};

/// Returns the organization for an EIN, creating it on first lookup.
#[derive(Clone)]
pub struct OrganizationResolver {
    fetcher: Arc<dyn ContentFetcher>,
    extractor: ProfileExtractor,
    store: Arc<dyn OrganizationStore>,
    config: ResolverConfig,
}

impl OrganizationResolver {
    /// Create a resolver with the default profile URL template.
    pub fn new(
        fetcher: Arc<dyn ContentFetcher>,
        extractor: ProfileExtractor,
        store: Arc<dyn OrganizationStore>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            store,
            config: ResolverConfig::default(),
        }
    }

    /// Set the resolver config.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Get or create the organization for `ein`.
    ///
    /// The EIN lookup is the only check made before any network or model
    /// call. If a concurrent caller creates the same EIN first, the store
    /// reports a duplicate and the existing record is returned.
    #[instrument(skip(self))]
    pub async fn resolve(&self, ein: &str) -> Result<Organization> {
        let ein = Ein::parse(ein)?;

        if let Some(existing) = self.store.find_by_ein(&ein).await? {
            debug!(organization_id = %existing.id, "Organization already known");
            return Ok(existing);
        }

        let profile_url = self.config.profile_url(&ein);
        info!(profile_url = %profile_url, "Organization not found, extracting profile");

        let page = self
            .fetcher
            .fetch(&profile_url)
            .await
            .ok_or_else(|| ExtractionError::ProfileUnavailable {
                url: profile_url.clone(),
            })?;

        let profile = self.extractor.extract_profile(&page.markdown).await?;

        let new_org = NewOrganization::from_profile(ein.clone(), profile_url, profile);
        match self.store.create(new_org).await {
            Ok(created) => {
                info!(organization_id = %created.id, name = ?created.name, "Organization created");
                Ok(created)
            }
            Err(StoreError::Duplicate { .. }) => {
                warn!("Organization created concurrently, re-reading existing record");
                self.store
                    .find_by_ein(&ein)
                    .await?
                    .ok_or_else(|| {
                        ExtractionError::Storage(StoreError::Backend(
                            format!("duplicate reported for {} but no record found", ein).into(),
                        ))
                    })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreResult;
    use crate::stores::MemoryStore;
    use crate::testing::{MockFetcher, MockLanguageModel};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    const PROFILE_URL: &str = "https://projects.propublica.org/nonprofits/organizations/753139219";

    const PROFILE_JSON: &str = r#"{"Name":"Pastor Serve","WebsiteUrl":"https://pastorserve.org","NteeCode":"X20","NteeDescription":"Christianity","ZipCode":"75201"}"#;

    fn resolver(
        fetcher: &MockFetcher,
        ai: &MockLanguageModel,
        store: &Arc<MemoryStore>,
    ) -> OrganizationResolver {
        let extractor = ProfileExtractor::new(Arc::new(ai.clone()), "gpt-4o-mini");
        OrganizationResolver::new(Arc::new(fetcher.clone()), extractor, store.clone())
    }

    #[tokio::test]
    async fn test_invalid_ein_fails_before_lookup() {
        let fetcher = MockFetcher::new();
        let ai = MockLanguageModel::new();
        let store = Arc::new(MemoryStore::new());

        let err = resolver(&fetcher, &ai, &store).resolve("not-an-ein").await.unwrap_err();

        assert!(matches!(err, ExtractionError::InvalidEin { .. }));
        assert_eq!(fetcher.fetch_call_count(), 0);
        assert_eq!(ai.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unavailable_profile_creates_nothing() {
        let fetcher = MockFetcher::new();
        let ai = MockLanguageModel::new();
        let store = Arc::new(MemoryStore::new());

        let err = resolver(&fetcher, &ai, &store).resolve("75-3139219").await.unwrap_err();

        assert!(matches!(err, ExtractionError::ProfileUnavailable { ref url } if url == PROFILE_URL));
        assert_eq!(ai.call_count(), 0);
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_malformed_profile_creates_nothing() {
        let fetcher = MockFetcher::new().with_html(PROFILE_URL, "<h1>Pastor Serve</h1>");
        let ai = MockLanguageModel::new().with_response("I could not find that.");
        let store = Arc::new(MemoryStore::new());

        let err = resolver(&fetcher, &ai, &store).resolve("75-3139219").await.unwrap_err();

        assert!(err.is_malformed_output());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_persists_extracted_fields() {
        let fetcher = MockFetcher::new().with_html(PROFILE_URL, "<h1>Pastor Serve</h1><p>Dallas, TX 75201</p>");
        let ai = MockLanguageModel::new().with_response(PROFILE_JSON);
        let store = Arc::new(MemoryStore::new());

        let org = resolver(&fetcher, &ai, &store).resolve("753139219").await.unwrap();

        assert_eq!(org.ein.to_string(), "75-3139219");
        assert_eq!(org.name.as_deref(), Some("Pastor Serve"));
        assert_eq!(org.website_url.as_deref(), Some("https://pastorserve.org"));
        assert_eq!(org.profile_url, PROFILE_URL);
        assert_eq!(org.ntee_code.as_deref(), Some("X20"));
        assert_eq!(org.zip_code.as_deref(), Some("75201"));
        assert!(ai.calls()[0].prompt.contains("Pastor Serve"));
    }

    /// Misses the first lookup, as if another resolver created the record
    /// between our lookup and our create.
    struct RacingStore {
        inner: MemoryStore,
        missed: AtomicBool,
    }

    #[async_trait]
    impl OrganizationStore for RacingStore {
        async fn find_by_ein(&self, ein: &Ein) -> StoreResult<Option<Organization>> {
            if !self.missed.swap(true, Ordering::SeqCst) {
                return Ok(None);
            }
            self.inner.find_by_ein(ein).await
        }

        async fn create(&self, organization: NewOrganization) -> StoreResult<Organization> {
            self.inner.create(organization).await
        }
    }

    #[tokio::test]
    async fn test_duplicate_on_create_returns_existing() {
        let fetcher = MockFetcher::new().with_html(PROFILE_URL, "<h1>Pastor Serve</h1>");
        let ai = MockLanguageModel::new().with_response(PROFILE_JSON);

        let inner = MemoryStore::new();
        let winner = inner
            .create(NewOrganization {
                ein: Ein::parse("75-3139219").unwrap(),
                name: Some("Winner".to_string()),
                website_url: None,
                profile_url: PROFILE_URL.to_string(),
                ntee_code: None,
                ntee_description: None,
                zip_code: None,
            })
            .await
            .unwrap();
        let store = Arc::new(RacingStore {
            inner,
            missed: AtomicBool::new(false),
        });

        let extractor = ProfileExtractor::new(Arc::new(ai.clone()), "gpt-4o-mini");
        let resolver = OrganizationResolver::new(Arc::new(fetcher.clone()), extractor, store.clone());

        let org = resolver.resolve("75-3139219").await.unwrap();

        assert_eq!(org.id, winner.id);
        assert_eq!(org.name.as_deref(), Some("Winner"));
        assert_eq!(store.inner.len(), 1);
        assert_eq!(fetcher.fetch_call_count(), 1);
    }
}

//! Content fetcher trait.

use async_trait::async_trait;

use crate::types::page::FetchedPage;

/// Retrieves a page and its normalized text.
///
/// Transport failures are not errors at this seam: `None` means "no content
/// available" and callers degrade (empty link set, unavailable profile).
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetch `url` once. No retries.
    async fn fetch(&self, url: &str) -> Option<FetchedPage>;

    /// Fetcher name for logging.
    fn name(&self) -> &str {
        "fetcher"
    }
}

//! Crawl orchestrator - seed URL to a ranked shortlist of content URLs.
//!
//! Single-level: only links on the seed page itself are considered. Deeper
//! crawling would need an explicit depth/frontier parameter here rather than
//! recursion.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::Result;
use crate::links::extract_links;
use crate::pipeline::rank::{RelevanceRanker, MAX_RANKED_URLS};
use crate::traits::fetcher::ContentFetcher;

/// Fetch → extract links → rank.
#[derive(Clone)]
pub struct CrawlOrchestrator {
    fetcher: Arc<dyn ContentFetcher>,
    ranker: RelevanceRanker,
}

impl CrawlOrchestrator {
    pub fn new(fetcher: Arc<dyn ContentFetcher>, ranker: RelevanceRanker) -> Self {
        Self { fetcher, ranker }
    }

    /// Discover up to ten content URLs reachable from `seed_url`.
    ///
    /// A seed that returns no content yields an empty list. Ranking errors
    /// (including malformed model output) propagate.
    #[instrument(skip(self))]
    pub async fn discover_content_urls(&self, seed_url: &str) -> Result<Vec<String>> {
        let candidates = self.candidates(seed_url).await;
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        self.ranker.rank(&candidates).await
    }

    /// Like [`Self::discover_content_urls`], but falls back to the first ten
    /// candidates when the model's ranking is unusable.
    #[instrument(skip(self))]
    pub async fn discover_content_urls_or_unranked(&self, seed_url: &str) -> Result<Vec<String>> {
        let mut candidates = self.candidates(seed_url).await;
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        match self.ranker.rank(&candidates).await {
            Ok(ranked) => Ok(ranked),
            Err(e) if e.is_malformed_output() => {
                warn!(error = %e, "Ranking unusable, falling back to unranked candidates");
                candidates.truncate(MAX_RANKED_URLS);
                Ok(candidates)
            }
            Err(e) => Err(e),
        }
    }

    /// Candidate links on the seed page, in stable (sorted) order.
    async fn candidates(&self, seed_url: &str) -> Vec<String> {
        let Some(page) = self.fetcher.fetch(seed_url).await else {
            info!(fetcher = self.fetcher.name(), "Seed page has no content");
            return Vec::new();
        };

        let links: Vec<String> = extract_links(&page.html, seed_url).into_iter().collect();
        info!(candidates = links.len(), "Extracted candidate links");
        links
    }
}

//! Nonprofit Web Presence Discovery
//!
//! Finds a nonprofit's website content and turns unstructured pages into
//! structured organization records with a language model.
//!
//! # Pipeline
//!
//! ```text
//! resolve(EIN)       : lookup ─┬─ hit ──────────────────────────────► Organization
//!                              └─ miss ─► fetch profile ─► extract ─► persist
//!
//! discover(seed URL) : fetch seed ─► extract links ─► rank (≤ 10) ─► URLs
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use orgscout::{HttpFetcher, MemoryStore, OrganizationResolver, ProfileExtractor};
//!
//! let extractor = ProfileExtractor::new(ai.clone(), "gpt-4o-mini");
//! let resolver = OrganizationResolver::new(
//!     Arc::new(HttpFetcher::new()?),
//!     extractor,
//!     Arc::new(MemoryStore::new()),
//! );
//!
//! let org = resolver.resolve("75-3139219").await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator seams (LanguageModel, ContentFetcher, OrganizationStore)
//! - [`types`] - Organization, EIN, extracted profile, fetched page
//! - [`links`] - Same-origin link extraction
//! - [`fetchers`] - HTTP content fetcher
//! - [`pipeline`] - Ranker, profile extractor, resolver, crawl orchestrator
//! - [`stores`] - Organization stores (memory, postgres)
//! - [`testing`] - Mock implementations for testing

pub mod config;
pub mod error;
pub mod fetchers;
pub mod links;
pub mod normalize;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "openai")]
pub mod ai;

pub use config::{ResolverConfig, DEFAULT_MODEL, DEFAULT_PROFILE_URL_TEMPLATE};
pub use error::{CrawlError, CrawlResult, ExtractionError, Result, StoreError, StoreResult};
pub use links::extract_links;
pub use traits::{ai::LanguageModel, fetcher::ContentFetcher, store::OrganizationStore};
pub use types::{
    ein::Ein,
    organization::{NewOrganization, Organization},
    page::FetchedPage,
    profile::ExtractedProfile,
};

pub use fetchers::HttpFetcher;
pub use pipeline::{
    format_extract_prompt, format_rank_prompt, parse_profile_response, parse_rank_response,
    CrawlOrchestrator, OrganizationResolver, ProfileExtractor, RelevanceRanker, MAX_RANKED_URLS,
};
pub use stores::MemoryStore;

#[cfg(feature = "postgres")]
pub use stores::PostgresStore;

#[cfg(feature = "openai")]
pub use ai::OpenAiLanguageModel;

pub use testing::{MockFetcher, MockLanguageModel};

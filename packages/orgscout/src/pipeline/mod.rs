//! Discovery pipeline.
//!
//! - [`prompts`] - Prompt templates for ranking and profile extraction
//! - [`parse`] - Defensive parsing of model output
//! - [`rank`] - Relevance ranker
//! - [`profile`] - Profile extractor
//! - [`resolve`] - Get-or-create organization resolver
//! - [`crawl`] - Single-level crawl orchestrator

pub mod crawl;
pub mod parse;
pub mod profile;
pub mod prompts;
pub mod rank;
pub mod resolve;

pub use crawl::CrawlOrchestrator;
pub use parse::{parse_profile_response, parse_rank_response};
pub use profile::ProfileExtractor;
pub use prompts::{format_extract_prompt, format_rank_prompt};
pub use rank::{RelevanceRanker, MAX_RANKED_URLS};
pub use resolve::OrganizationResolver;

//! Content fetcher implementations.
//!
//! - `HttpFetcher` - Single GET via reqwest, markdown via htmd
//! - `MockFetcher` - For testing (see [`crate::testing`])

mod http;

pub use http::HttpFetcher;

// Re-export from traits for convenience
pub use crate::traits::fetcher::ContentFetcher;

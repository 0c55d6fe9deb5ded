//! Typed errors for the discovery library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match on
//! the malformed-model-output case explicitly.

use thiserror::Error;

/// Errors that can occur during ranking, extraction and resolution.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Model output could not be parsed as the expected JSON shape.
    ///
    /// `raw` is the untouched model text, kept for diagnostics.
    #[error("malformed model output: {reason}")]
    MalformedModelOutput { raw: String, reason: String },

    /// Language model call failed (network, auth, provider error)
    #[error("language model error: {0}")]
    LanguageModel(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Profile source page returned no content
    #[error("profile unavailable: {url}")]
    ProfileUnavailable { url: String },

    /// Identifier is not a well-formed EIN
    #[error("invalid EIN: {input}")]
    InvalidEin { input: String },

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl ExtractionError {
    /// Build a `MalformedModelOutput` from the raw text and a parse failure.
    pub fn malformed(raw: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::MalformedModelOutput {
            raw: raw.into(),
            reason: reason.to_string(),
        }
    }

    /// True when the model answered but the answer was unusable.
    pub fn is_malformed_output(&self) -> bool {
        matches!(self, Self::MalformedModelOutput { .. })
    }
}

/// Errors that can occur while fetching a page.
///
/// Only surfaced by [`crate::HttpFetcher::try_fetch`]; the
/// [`crate::ContentFetcher`] seam absorbs them into "no content".
#[derive(Debug, Error)]
pub enum CrawlError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },
}

/// Errors raised by an [`crate::OrganizationStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// An organization with this EIN already exists.
    #[error("organization already exists for EIN {ein}")]
    Duplicate { ein: String },

    /// Backend failure (connection, query, decode)
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for crawl operations.
pub type CrawlResult<T> = std::result::Result<T, CrawlError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

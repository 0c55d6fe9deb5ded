//! Fetched page content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::{extract_title, html_to_markdown};

/// A page as returned by a [`crate::ContentFetcher`]: raw markup plus its
/// normalized markdown rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,

    /// Raw HTML
    pub html: String,

    /// Normalized markdown text
    pub markdown: String,

    /// Content of `<title>`, if any
    pub title: Option<String>,

    /// When the page was fetched
    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    /// Build a page from raw HTML, normalizing it to markdown.
    pub fn from_html(url: impl Into<String>, html: impl Into<String>) -> Self {
        let html = html.into();
        let markdown = html_to_markdown(&html);
        let title = extract_title(&html);

        Self {
            url: url.into(),
            html,
            markdown,
            title,
            fetched_at: Utc::now(),
        }
    }
}

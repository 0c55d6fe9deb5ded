//! HTTP-based content fetcher.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{CrawlError, CrawlResult};
use crate::traits::fetcher::ContentFetcher;
use crate::types::page::FetchedPage;

/// Fetches pages over HTTP and normalizes them to markdown.
///
/// One GET per call. Redirects and timeouts are whatever the underlying
/// `reqwest::Client` does; no retries.
///
/// # Example
///
/// ```rust,ignore
/// use orgscout::{ContentFetcher, HttpFetcher};
///
/// let fetcher = HttpFetcher::new()?;
/// if let Some(page) = fetcher.fetch("https://pastorserve.org").await {
///     println!("{}", page.markdown);
/// }
/// ```
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a browser-like user agent.
    pub fn new() -> CrawlResult<Self> {
        // Browser-like User-Agent; many nonprofit hosts block obvious bots
        let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| CrawlError::Http(Box::new(e)))?;

        Ok(Self { client })
    }

    /// Use a custom HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch a page, surfacing the failure reason.
    pub async fn try_fetch(&self, url: &str) -> CrawlResult<FetchedPage> {
        let parsed = url::Url::parse(url).map_err(|_| CrawlError::InvalidUrl {
            url: url.to_string(),
        })?;

        debug!(url = %url, "HTTP fetch starting");
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| CrawlError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| CrawlError::Http(Box::new(e)))?;

        let page = FetchedPage::from_html(url, html);

        debug!(
            url = %url,
            html_length = page.html.len(),
            markdown_length = page.markdown.len(),
            title = ?page.title,
            "Page fetched successfully"
        );

        Ok(page)
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<FetchedPage> {
        match self.try_fetch(url).await {
            Ok(page) => Some(page),
            Err(e) => {
                warn!(url = %url, error = %e, "Fetch failed, treating as no content");
                None
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

//! HTML to markdown normalization.
//!
//! Lossy by nature. Headings, paragraphs and lists survive well enough for
//! the profile extractor to find field values; layout does not.

use htmd::HtmlToMarkdown;
use scraper::{Html, Selector};

/// Tags whose content never carries readable text.
const SKIP_TAGS: [&str; 5] = ["script", "style", "noscript", "iframe", "svg"];

/// Convert HTML to markdown.
///
/// Falls back to the document's concatenated text nodes if conversion fails.
pub fn html_to_markdown(html: &str) -> String {
    let converter = HtmlToMarkdown::builder()
        .skip_tags(SKIP_TAGS.to_vec())
        .build();

    match converter.convert(html) {
        Ok(markdown) => markdown.trim().to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "htmd conversion failed, falling back to text nodes");
            let document = Html::parse_document(html);
            document
                .root_element()
                .text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Extract title from HTML document.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

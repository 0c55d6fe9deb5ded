//! Link extraction from fetched pages.
//!
//! Only same-origin, navigable links are kept. "Same origin" here is a string
//! prefix check against the base URL exactly as given, not a comparison of
//! scheme/host/port.

use scraper::{Html, Selector};
use std::collections::BTreeSet;
use tracing::debug;
use url::Url;

/// Pseudo-link schemes that never lead to a page.
const SKIP_SCHEMES: [&str; 4] = ["mailto:", "tel:", "data:", "javascript:"];

/// Extract candidate links from `html`, resolved against `base_url`.
///
/// Excluded:
/// - any href containing `#` (fragment-only or not)
/// - `mailto:`, `tel:`, `data:` and `javascript:` links
/// - hrefs that fail to resolve
/// - resolved URLs that do not start with `base_url`
///
/// An unparseable `base_url` yields an empty set.
pub fn extract_links(html: &str, base_url: &str) -> BTreeSet<String> {
    let Ok(base) = Url::parse(base_url) else {
        debug!(base_url = %base_url, "Base URL does not parse, no links extracted");
        return BTreeSet::new();
    };

    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return BTreeSet::new();
    };

    let document = Html::parse_document(html);

    document
        .select(&anchor_selector)
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| is_navigable(href))
        .filter_map(|href| match base.join(href.trim()) {
            Ok(resolved) => Some(resolved.to_string()),
            Err(e) => {
                debug!(href = %href, error = %e, "Skipping unresolvable href");
                None
            }
        })
        .filter(|url| url.starts_with(base_url))
        .collect()
}

/// Check whether an href can lead to another page.
fn is_navigable(href: &str) -> bool {
    if href.contains('#') {
        return false;
    }

    let lowered = href.trim().to_ascii_lowercase();
    !SKIP_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme))
}

//! Integration tests for seed URL discovery.
//!
//! Exercises fetch → link extraction → ranking with mock collaborators.

use std::sync::Arc;

use orgscout::{
    extract_links, CrawlOrchestrator, MockFetcher, MockLanguageModel, RelevanceRanker,
    MAX_RANKED_URLS,
};

const SEED: &str = "https://pastorserve.org";

const PATHS: [&str; 15] = [
    "/about",
    "/mission",
    "/our-story",
    "/team",
    "/board",
    "/programs",
    "/retreats",
    "/coaching",
    "/impact",
    "/stories",
    "/donate",
    "/events",
    "/contact",
    "/privacy",
    "/login",
];

/// Seed page with 15 same-origin links and 5 that must be excluded.
fn seed_html() -> String {
    let mut html = String::from("<html><head><title>Pastor Serve</title></head><body><nav>");
    for path in PATHS {
        html.push_str(&format!(r#"<a href="{path}">{path}</a>"#));
    }
    html.push_str(
        r##"
        <a href="mailto:info@pastorserve.org">Email</a>
        <a href="tel:+12145550100">Call</a>
        <a href="#top">Top</a>
        <a href="https://facebook.com/pastorserve">Facebook</a>
        <a href="javascript:void(0)">Menu</a>
        "##,
    );
    html.push_str("</nav></body></html>");
    html
}

fn ranked_answer() -> Vec<String> {
    [
        "/about", "/mission", "/programs", "/retreats", "/coaching", "/impact", "/team", "/board",
    ]
    .iter()
    .map(|p| format!("{SEED}{p}"))
    .collect()
}

fn orchestrator(fetcher: &MockFetcher, ai: &MockLanguageModel) -> CrawlOrchestrator {
    let ranker = RelevanceRanker::new(Arc::new(ai.clone()), "gpt-4o-mini");
    CrawlOrchestrator::new(Arc::new(fetcher.clone()), ranker)
}

#[test]
fn test_seed_page_yields_fifteen_candidates() {
    let links = extract_links(&seed_html(), SEED);

    assert_eq!(links.len(), 15);
    assert!(links.iter().all(|l| l.starts_with(SEED)));
    assert!(!links.iter().any(|l| l.contains("facebook.com")));
}

#[tokio::test]
async fn test_discover_returns_model_ranking_in_order() {
    let fetcher = MockFetcher::new().with_html(SEED, seed_html());
    let expected = ranked_answer();
    let ai = MockLanguageModel::new().with_response(serde_json::to_string(&expected).unwrap());

    let urls = orchestrator(&fetcher, &ai)
        .discover_content_urls(SEED)
        .await
        .unwrap();

    assert_eq!(urls, expected);
    assert_eq!(fetcher.fetch_calls(), vec![SEED]);

    // Ranking prompt lists every candidate and none of the excluded links.
    let calls = ai.calls();
    assert_eq!(calls.len(), 1);
    for path in PATHS {
        assert!(calls[0].prompt.contains(&format!("{SEED}{path}")));
    }
    assert!(!calls[0].prompt.contains("mailto:"));
    assert!(!calls[0].prompt.contains("facebook.com"));
}

#[tokio::test]
async fn test_discover_caps_oversized_answers() {
    let fetcher = MockFetcher::new().with_html(SEED, seed_html());
    let everything: Vec<String> = PATHS.iter().map(|p| format!("{SEED}{p}")).collect();
    let ai = MockLanguageModel::new().with_response(serde_json::to_string(&everything).unwrap());

    let urls = orchestrator(&fetcher, &ai)
        .discover_content_urls(SEED)
        .await
        .unwrap();

    assert_eq!(urls.len(), MAX_RANKED_URLS);
    assert_eq!(urls[..], everything[..MAX_RANKED_URLS]);
}

#[tokio::test]
async fn test_discover_with_prose_answer_is_malformed() {
    let fetcher = MockFetcher::new().with_html(SEED, seed_html());
    let ai = MockLanguageModel::new()
        .with_response("The most relevant pages are /about and /mission.");

    let err = orchestrator(&fetcher, &ai)
        .discover_content_urls(SEED)
        .await
        .unwrap_err();

    assert!(err.is_malformed_output());
}

#[tokio::test]
async fn test_unranked_fallback_returns_first_ten_candidates() {
    let fetcher = MockFetcher::new().with_html(SEED, seed_html());
    let ai = MockLanguageModel::new().with_response("Sorry, I can't help with that.");

    let urls = orchestrator(&fetcher, &ai)
        .discover_content_urls_or_unranked(SEED)
        .await
        .unwrap();

    let candidates: Vec<String> = extract_links(&seed_html(), SEED).into_iter().collect();
    assert_eq!(urls, candidates[..MAX_RANKED_URLS]);
}

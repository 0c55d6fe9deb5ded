//! Relevance ranker - narrow candidate links to content pages.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::pipeline::{
    parse::parse_rank_response, profile::ProfileExtractor, prompts::format_rank_prompt,
};
use crate::traits::ai::LanguageModel;

/// Upper bound on ranked URLs returned per crawl.
pub const MAX_RANKED_URLS: usize = 10;

/// Asks a language model which candidate URLs carry organizational content.
///
/// Shares its [`LanguageModel`] with the profile extractor.
#[derive(Clone)]
pub struct RelevanceRanker {
    ai: Arc<dyn LanguageModel>,
    model: String,
}

impl RelevanceRanker {
    pub fn new(ai: Arc<dyn LanguageModel>, model: impl Into<String>) -> Self {
        Self {
            ai,
            model: model.into(),
        }
    }

    /// Rank with the same completion primitive and model as `extractor`.
    pub fn sharing(extractor: &ProfileExtractor) -> Self {
        Self::new(extractor.language_model(), extractor.model())
    }

    /// Model identifier used for ranking calls.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Rank `urls`, returning at most [`MAX_RANKED_URLS`] in the model's order.
    ///
    /// An empty candidate list returns an empty result without a model call.
    /// Output that is not a JSON array of strings fails with
    /// `MalformedModelOutput`; there is no retry or repair.
    pub async fn rank(&self, urls: &[String]) -> Result<Vec<String>> {
        if urls.is_empty() {
            debug!("No candidate URLs, skipping ranking");
            return Ok(Vec::new());
        }

        let prompt = format_rank_prompt(urls, MAX_RANKED_URLS);

        info!(candidates = urls.len(), model = %self.model, "Ranking candidate URLs");
        let response = self.ai.complete(&prompt, &self.model).await?;

        let mut ranked = parse_rank_response(&response).inspect_err(|_| {
            warn!(
                response_preview = %preview(&response),
                "Ranking response was not a JSON array of strings"
            );
        })?;

        if ranked.len() > MAX_RANKED_URLS {
            debug!(returned = ranked.len(), "Model returned more than the cap, truncating");
            ranked.truncate(MAX_RANKED_URLS);
        }

        let candidates: HashSet<&str> = urls.iter().map(String::as_str).collect();
        for url in ranked.iter().filter(|u| !candidates.contains(u.as_str())) {
            warn!(url = %url, "Ranked URL was not among the candidates");
        }

        info!(ranked = ranked.len(), "Ranking complete");
        Ok(ranked)
    }
}

fn preview(text: &str) -> &str {
    match text.char_indices().nth(200) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

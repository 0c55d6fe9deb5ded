//! Profile extractor - page text to structured organization fields.

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::Result;
use crate::pipeline::{parse::parse_profile_response, prompts::format_extract_prompt};
use crate::traits::ai::LanguageModel;
use crate::types::profile::ExtractedProfile;

/// Extracts [`ExtractedProfile`] fields from normalized page text.
///
/// The parse step is the boundary between untrusted model text and the rest
/// of the system: the result is always a profile or a typed error.
#[derive(Clone)]
pub struct ProfileExtractor {
    ai: Arc<dyn LanguageModel>,
    model: String,
}

impl ProfileExtractor {
    pub fn new(ai: Arc<dyn LanguageModel>, model: impl Into<String>) -> Self {
        Self {
            ai,
            model: model.into(),
        }
    }

    /// Model identifier used for extraction calls.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The underlying completion primitive, shared with the ranker.
    pub fn language_model(&self) -> Arc<dyn LanguageModel> {
        Arc::clone(&self.ai)
    }

    /// Extract profile fields from `page_text`.
    pub async fn extract_profile(&self, page_text: &str) -> Result<ExtractedProfile> {
        let prompt = format_extract_prompt(page_text);

        info!(text_length = page_text.len(), model = %self.model, "Extracting profile");
        let response = self.ai.complete(&prompt, &self.model).await?;

        let profile = parse_profile_response(&response).inspect_err(|e| {
            warn!(error = %e, response_length = response.len(), "Profile response was not a JSON object");
        })?;

        if profile.is_empty() {
            warn!("Model returned none of the profile fields");
        }

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::testing::MockLanguageModel;

    #[tokio::test]
    async fn test_extracts_fields() {
        let ai = Arc::new(MockLanguageModel::new().with_response(
            r#"{"Name":"Acme Aid","WebsiteUrl":"https://acme.org","NteeCode":"P20","NteeDescription":"Human Services","ZipCode":"10001"}"#,
        ));
        let extractor = ProfileExtractor::new(ai.clone(), "gpt-4o-mini");

        let profile = extractor.extract_profile("# Acme Aid\n\nNew York, NY 10001").await.unwrap();

        assert_eq!(profile.name.as_deref(), Some("Acme Aid"));
        assert_eq!(profile.website_url.as_deref(), Some("https://acme.org"));
        assert_eq!(profile.ntee_code.as_deref(), Some("P20"));
        assert_eq!(profile.ntee_description.as_deref(), Some("Human Services"));
        assert_eq!(profile.zip_code.as_deref(), Some("10001"));

        let calls = ai.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.ends_with("# Acme Aid\n\nNew York, NY 10001"));
    }

    #[tokio::test]
    async fn test_prose_wrapped_json_is_malformed() {
        let raw = r#"Sure, here's the data: {"Name":"Acme Aid"}"#;
        let ai = Arc::new(MockLanguageModel::new().with_response(raw));
        let extractor = ProfileExtractor::new(ai, "gpt-4o-mini");

        let err = extractor.extract_profile("page").await.unwrap_err();

        match err {
            ExtractionError::MalformedModelOutput { raw: kept, .. } => assert_eq!(kept, raw),
            other => panic!("expected MalformedModelOutput, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let ai = Arc::new(MockLanguageModel::new());
        let extractor = ProfileExtractor::new(ai, "gpt-4o-mini");

        let err = extractor.extract_profile("page").await.unwrap_err();

        assert!(matches!(err, ExtractionError::LanguageModel(_)));
    }
}

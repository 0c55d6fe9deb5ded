//! OpenAI chat completions as a [`LanguageModel`].
//!
//! # Example
//!
//! ```rust,ignore
//! use orgscout::ai::OpenAiLanguageModel;
//!
//! let ai = Arc::new(OpenAiLanguageModel::from_env()?);
//! let extractor = ProfileExtractor::new(ai, "gpt-4o-mini");
//! ```

use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};
use tracing::debug;

use crate::error::{ExtractionError, Result};
use crate::traits::ai::LanguageModel;

/// Sends each prompt as a single user message and returns the reply verbatim.
#[derive(Clone)]
pub struct OpenAiLanguageModel {
    client: OpenAIClient,
    temperature: Option<f32>,
}

impl OpenAiLanguageModel {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_client(OpenAIClient::new(api_key))
    }

    /// Create from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let client = OpenAIClient::from_env().map_err(|e| ExtractionError::LanguageModel(Box::new(e)))?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: OpenAIClient) -> Self {
        Self {
            client,
            temperature: None,
        }
    }

    /// Set a sampling temperature (provider default when unset).
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }
}

#[async_trait]
impl LanguageModel for OpenAiLanguageModel {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String> {
        let mut request = ChatRequest::new(model).message(Message::user(prompt));
        if let Some(temperature) = self.temperature {
            request = request.temperature(temperature);
        }

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(|e| ExtractionError::LanguageModel(Box::new(e)))?;

        debug!(
            model = %response.model,
            response_length = response.content.len(),
            "Completion received"
        );
        Ok(response.content)
    }
}

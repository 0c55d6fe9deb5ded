//! Language model trait.
//!
//! The single integration point with a model provider. Prompting and response
//! parsing live in [`crate::pipeline`]; implementations only move text.

use async_trait::async_trait;

use crate::error::Result;

/// Single request, single response text completion.
///
/// Implementations must not post-process the returned text: callers parse it
/// defensively and expect whatever the model produced.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Complete `prompt` with the given model and return the raw text.
    async fn complete(&self, prompt: &str, model: &str) -> Result<String>;
}

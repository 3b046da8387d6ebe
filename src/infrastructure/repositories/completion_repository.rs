use crate::domain::podcast::{CompletionOptions, ScriptPrompt};
use async_trait::async_trait;

/// Repository for text completion.
/// Abstracts the underlying language-model provider (OpenAI, compatible gateways, etc.)
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Complete a system + user prompt pair
    ///
    /// Returns the generated text exactly as the provider produced it
    ///
    /// # Errors
    /// Returns error if the provider fails or returns no content
    async fn complete(
        &self,
        prompt: &ScriptPrompt,
        options: &CompletionOptions,
    ) -> Result<String, String>;
}

//! Text generator trait

use async_trait::async_trait;

use crate::ProviderError;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ProviderError>;

/// A single-shot text generation endpoint
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and return the generated text.
    ///
    /// `Ok(None)` means the endpoint answered but produced no text.
    async fn generate(&self, prompt: &str) -> ModelResult<Option<String>>;

    /// Get the model identifier
    fn model(&self) -> &str;

    /// Get the provider name
    fn provider(&self) -> &str;
}

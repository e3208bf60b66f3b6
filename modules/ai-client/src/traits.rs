use async_trait::async_trait;

use crate::error::Result;

// =============================================================================
// TextGenerator Trait
// =============================================================================

/// Prompt-in, text-out completion. Implemented by every provider backend so
/// callers can hold an `Arc<dyn TextGenerator>` without caring which API is
/// behind it.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a single user prompt and return the model's text reply.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model identifier used for requests, for logging.
    fn model(&self) -> &str;
}

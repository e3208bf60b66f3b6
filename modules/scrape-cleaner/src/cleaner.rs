use std::sync::Arc;

use ai_client::{AiError, TextGenerator};
use tracing::{debug, warn};

use crate::prompt::CleaningPrompt;

/// Result of one cleaning attempt.
///
/// A failed generation call is not an error for the run: the original body
/// is carried along and written out unchanged.
#[derive(Debug)]
pub enum CleanOutcome {
    Cleaned(String),
    Fallback { original: String, error: AiError },
}

impl CleanOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, CleanOutcome::Fallback { .. })
    }

    pub fn into_text(self) -> String {
        match self {
            CleanOutcome::Cleaned(text) => text,
            CleanOutcome::Fallback { original, .. } => original,
        }
    }
}

/// Sends article bodies through a [`TextGenerator`] with the cleaning prompt.
pub struct TextCleaner {
    generator: Arc<dyn TextGenerator>,
    prompt: CleaningPrompt,
}

impl TextCleaner {
    pub fn new(generator: Arc<dyn TextGenerator>, prompt: CleaningPrompt) -> Self {
        Self { generator, prompt }
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// One generation call, no retry. The reply is trimmed; an error or a
    /// blank reply falls back to `body`.
    pub async fn clean(&self, body: &str) -> CleanOutcome {
        let prompt = self.prompt.render(body);

        debug!(
            model = self.generator.model(),
            body_bytes = body.len(),
            "Requesting cleaned text"
        );

        let result = match self.generator.generate(&prompt).await {
            Ok(text) if text.trim().is_empty() => Err(AiError::EmptyResponse("text generator")),
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => Err(e),
        };

        match result {
            Ok(cleaned) => CleanOutcome::Cleaned(cleaned),
            Err(error) => {
                warn!(
                    model = self.generator.model(),
                    error = %error,
                    "Text generation failed, keeping original text"
                );
                CleanOutcome::Fallback {
                    original: body.to_string(),
                    error,
                }
            }
        }
    }
}

mod client;
pub(crate) mod types;

use async_trait::async_trait;

use crate::error::{AiError, Result};
use crate::traits::TextGenerator;

use client::OpenAiClient;
use types::*;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

const MAX_OUTPUT_TOKENS: u32 = 8192;

// =============================================================================
// OpenAi Agent
// =============================================================================

#[derive(Clone)]
pub struct OpenAi {
    api_key: String,
    model: String,
    base_url: Option<String>,
    http: reqwest::Client,
}

impl OpenAi {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| AiError::Config("OPENAI_API_KEY environment variable not set".into()))?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    fn client(&self) -> OpenAiClient {
        let client = OpenAiClient::new(&self.api_key, self.http.clone());
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAi {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let mut request = ChatRequest::new(&self.model).message(WireMessage::user(prompt));

        if uses_max_completion_tokens(&self.model) {
            request = request.max_completion_tokens(MAX_OUTPUT_TOKENS);
        } else {
            request = request.max_tokens(MAX_OUTPUT_TOKENS).temperature(0.0);
        }

        let response = self.client().chat(&request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(AiError::EmptyResponse("OpenAI"))?;

        if choice.finish_reason.as_deref() == Some("length") {
            return Err(AiError::Truncated("OpenAI"));
        }

        let message = choice.message;

        if let Some(refusal) = message.refusal {
            return Err(AiError::Blocked(refusal));
        }

        message
            .content
            .filter(|c| !c.is_empty())
            .ok_or(AiError::EmptyResponse("OpenAI"))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

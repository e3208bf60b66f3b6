mod client;
pub(crate) mod types;

use async_trait::async_trait;

use crate::error::{AiError, Result};
use crate::traits::TextGenerator;

use client::ClaudeClient;
use types::*;

pub const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";

// =============================================================================
// Claude Agent
// =============================================================================

#[derive(Clone)]
pub struct Claude {
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: Option<String>,
    http: reqwest::Client,
}

impl Claude {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: 8192,
            base_url: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            AiError::Config("ANTHROPIC_API_KEY environment variable not set".into())
        })?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Article bodies can be long; the reply has to fit the whole cleaned text.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    fn client(&self) -> ClaudeClient {
        let client = ClaudeClient::new(&self.api_key, self.http.clone());
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }
}

#[async_trait]
impl TextGenerator for Claude {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(WireMessage::user(prompt))
            .max_tokens(self.max_tokens)
            .temperature(0.0);

        let response = self.client().chat(&request).await?;

        if response.stop_reason.as_deref() == Some("max_tokens") {
            return Err(AiError::Truncated("Claude"));
        }

        response.text().ok_or(AiError::EmptyResponse("Claude"))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

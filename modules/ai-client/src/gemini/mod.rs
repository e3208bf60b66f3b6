mod client;
pub(crate) mod types;

use async_trait::async_trait;

use crate::error::{AiError, Result};
use crate::traits::TextGenerator;

use client::GeminiClient;
use types::*;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

// =============================================================================
// Gemini Agent
// =============================================================================

/// Google Gemini `generateContent` backend.
#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    model: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
    base_url: Option<String>,
    http: reqwest::Client,
}

impl Gemini {
    /// Accepts both `gemini-2.5-flash` and the fully-qualified `models/gemini-2.5-flash`.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        let model = model
            .strip_prefix("models/")
            .map(str::to_string)
            .unwrap_or(model);
        Self {
            api_key: api_key.into(),
            model,
            temperature: None,
            max_output_tokens: None,
            base_url: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AiError::Config("GEMINI_API_KEY environment variable not set".into()))?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    fn client(&self) -> GeminiClient {
        let client = GeminiClient::new(&self.api_key, self.http.clone());
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }
}

#[async_trait]
impl TextGenerator for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let mut request = GenerateContentRequest::new(vec![Content::user(prompt)]);
        if let Some(temperature) = self.temperature {
            request = request.temperature(temperature);
        }
        if let Some(max_output_tokens) = self.max_output_tokens {
            request = request.max_output_tokens(max_output_tokens);
        }

        let response = self.client().generate_content(&self.model, &request).await?;

        if let Some(reason) = response.block_reason() {
            return Err(AiError::Blocked(reason.to_string()));
        }

        if response.finish_reason() == Some("MAX_TOKENS") {
            return Err(AiError::Truncated("Gemini"));
        }

        match response.text() {
            Some(text) => Ok(text),
            None => match response.finish_reason() {
                Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
                    Err(AiError::Blocked(reason.to_string()))
                }
                _ => Err(AiError::EmptyResponse("Gemini")),
            },
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::claude::{Claude, DEFAULT_CLAUDE_MODEL};
use crate::error::AiError;
use crate::gemini::{Gemini, DEFAULT_GEMINI_MODEL};
use crate::openai::{OpenAi, DEFAULT_OPENAI_MODEL};
use crate::traits::TextGenerator;

/// Text generation backend selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Gemini,
    Claude,
    #[serde(rename = "openai")]
    OpenAi,
}

impl Provider {
    pub fn default_model(self) -> &'static str {
        match self {
            Provider::Gemini => DEFAULT_GEMINI_MODEL,
            Provider::Claude => DEFAULT_CLAUDE_MODEL,
            Provider::OpenAi => DEFAULT_OPENAI_MODEL,
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn api_key_env(self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::Claude => "ANTHROPIC_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
        }
    }

    pub fn generator(self, api_key: &str, model: &str) -> Arc<dyn TextGenerator> {
        match self {
            Provider::Gemini => Arc::new(Gemini::new(api_key, model)),
            Provider::Claude => Arc::new(Claude::new(api_key, model)),
            Provider::OpenAi => Arc::new(OpenAi::new(api_key, model)),
        }
    }
}

impl FromStr for Provider {
    type Err = AiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(Provider::Gemini),
            "claude" | "anthropic" => Ok(Provider::Claude),
            "openai" => Ok(Provider::OpenAi),
            other => Err(AiError::Config(format!(
                "unknown provider '{other}' (expected gemini, claude or openai)"
            ))),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Gemini => "gemini",
            Provider::Claude => "claude",
            Provider::OpenAi => "openai",
        };
        f.write_str(name)
    }
}

// Test doubles for the cleaning pipeline.
//
// StubGenerator stands in for the text generation service at the
// TextGenerator boundary: it either returns a fixed reply or fails, and
// records every prompt it receives.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use ai_client::{AiError, Result, TextGenerator};
use async_trait::async_trait;
use scrape_cleaner::{CleaningPrompt, TextCleaner};

enum Reply {
    Fixed(String),
    Fail,
}

pub struct StubGenerator {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    /// Answers every prompt with `text`.
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fixed(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Fails every call the way an exhausted quota does.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Fixed(text) => Ok(text.clone()),
            Reply::Fail => Err(AiError::Api {
                status: 429,
                message: "RESOURCE_EXHAUSTED".to_string(),
            }),
        }
    }

    fn model(&self) -> &str {
        "stub"
    }
}

pub fn cleaner(generator: &Arc<StubGenerator>) -> TextCleaner {
    TextCleaner::new(generator.clone(), CleaningPrompt::builtin())
}

pub fn write_input(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

pub fn read_output(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

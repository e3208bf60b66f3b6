use std::path::Path;

use crate::error::{CleanerError, Result};

/// Placeholder replaced by the article body when a prompt is rendered.
pub const TEXT_PLACEHOLDER: &str = "{text}";

const BUILTIN_TEMPLATE: &str = r#"
You are a text processing expert specializing in cleaning scraped web content for a Retrieval-Augmented Generation (RAG) system. Your task is to reformat the provided text to ensure perfect paragraphing and remove any irrelevant artifacts from the scraping process.

Instructions:
- Correct any spacing or paragraphing errors. Ensure each distinct paragraph is separated by a single double newline (\n\n).
- Remove any fully duplicate sentences or entire duplicate paragraphs.
- Delete standalone navigation elements, footer text, or other non-article text (e.g., "Word template:", "Find out more about:", "Click here", "Related articles").
- Merge sentence fragments into coherent paragraphs where it is obvious they belong together.
- Do not summarize, invent, or change the meaning of the original text. The output must be the cleaned, full text of the article. Preserve the original wording.

Here is the text to clean:
---
{text}
---
"#;

/// Instruction template wrapped around every article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningPrompt {
    template: String,
}

impl CleaningPrompt {
    pub fn builtin() -> Self {
        Self {
            template: BUILTIN_TEMPLATE.to_string(),
        }
    }

    pub fn from_template(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(TEXT_PLACEHOLDER) {
            return Err(CleanerError::Prompt(format!(
                "template is missing the {TEXT_PLACEHOLDER} placeholder"
            )));
        }
        Ok(Self { template })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let template =
            std::fs::read_to_string(path).map_err(|e| CleanerError::filesystem(path, e))?;
        Self::from_template(template)
    }

    /// Only the first placeholder is substituted, so a body that itself
    /// contains `{text}` is embedded untouched.
    pub fn render(&self, body: &str) -> String {
        self.template.replacen(TEXT_PLACEHOLDER, body, 1)
    }
}

impl Default for CleaningPrompt {
    fn default() -> Self {
        Self::builtin()
    }
}

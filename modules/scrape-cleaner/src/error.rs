use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CleanerError>;

/// Failures that stop a cleaning run. Text generation failures never show up
/// here; the cleaner falls back to the original text instead.
#[derive(Debug, Error)]
pub enum CleanerError {
    /// Reading, listing or writing a file or directory failed
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt template error: {0}")]
    Prompt(String),
}

impl CleanerError {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CleanerError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

impl From<ai_client::AiError> for CleanerError {
    fn from(e: ai_client::AiError) -> Self {
        CleanerError::Config(e.to_string())
    }
}

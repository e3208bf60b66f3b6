//! Batch cleaner for scraped article text.
//!
//! Every `.txt` file in an input directory is split into its header and
//! body, the body is rewritten by a text generation model using a fixed
//! cleaning prompt, and the result is written under the same name in the
//! output directory. An existing output file means the input was already
//! handled and is never touched again.

pub mod cleaner;
pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod prompt;

pub use cleaner::{CleanOutcome, TextCleaner};
pub use config::{CleanerConfig, FileConfig};
pub use document::{split_header, CleanedDocument, SourceDocument};
pub use error::{CleanerError, Result};
pub use pipeline::{list_pending_files, process_all, PendingFile, RunSummary};
pub use prompt::CleaningPrompt;

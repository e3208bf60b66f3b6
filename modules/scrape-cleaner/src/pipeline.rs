use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::cleaner::TextCleaner;
use crate::document::SourceDocument;
use crate::error::{CleanerError, Result};

const SOURCE_EXTENSION: &str = ".txt";

/// An input file together with the output path that marks it as done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub source: PathBuf,
    pub target: PathBuf,
}

impl PendingFile {
    /// The output file is the only record of a finished file.
    pub fn is_processed(&self) -> bool {
        self.target.exists()
    }
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
    /// Files written with their original body because generation failed.
    pub fallbacks: usize,
}

/// List every `.txt` file in `input_dir`, sorted by name, paired with its
/// target path in `output_dir`. Already-processed files are included; the
/// caller decides whether to skip them.
pub fn list_pending_files(input_dir: &Path, output_dir: &Path) -> Result<Vec<PendingFile>> {
    let entries = fs::read_dir(input_dir).map_err(|e| CleanerError::filesystem(input_dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CleanerError::filesystem(input_dir, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| CleanerError::filesystem(entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!(name = ?raw, "Skipping file with non UTF-8 name");
                continue;
            }
        };
        if !name.ends_with(SOURCE_EXTENSION) {
            continue;
        }

        files.push(PendingFile {
            source: entry.path(),
            target: output_dir.join(&name),
            name,
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Clean every pending file in `input_dir` into `output_dir`, one at a time.
///
/// Files whose output already exists are skipped without being read. A
/// failed generation call keeps the original body and the run continues;
/// any filesystem error aborts the run.
pub async fn process_all(
    input_dir: &Path,
    output_dir: &Path,
    cleaner: &TextCleaner,
) -> Result<RunSummary> {
    fs::create_dir_all(output_dir).map_err(|e| CleanerError::filesystem(output_dir, e))?;

    let files = list_pending_files(input_dir, output_dir)?;
    info!(
        input_dir = %input_dir.display(),
        output_dir = %output_dir.display(),
        files = files.len(),
        model = cleaner.model(),
        "Starting cleaning run"
    );

    let mut summary = RunSummary::default();

    for file in &files {
        if file.is_processed() {
            info!(file = %file.name, "Skipping, already processed");
            summary.skipped += 1;
            continue;
        }

        info!(file = %file.name, "Processing");

        let raw = fs::read_to_string(&file.source)
            .map_err(|e| CleanerError::filesystem(&file.source, e))?;
        let source = SourceDocument::parse(file.name.as_str(), &raw);

        let outcome = cleaner.clean(&source.body).await;
        let fell_back = outcome.is_fallback();
        let cleaned = source.into_cleaned(outcome.into_text());

        if !write_new_file(&file.target, cleaned.render().as_bytes())? {
            warn!(file = %file.name, "Output appeared while processing, leaving it untouched");
            summary.skipped += 1;
            continue;
        }

        if fell_back {
            summary.fallbacks += 1;
        }
        summary.processed += 1;

        info!(
            file = %file.name,
            output = %file.target.display(),
            fallback = fell_back,
            "Finished"
        );
    }

    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        fallbacks = summary.fallbacks,
        "All files processed"
    );

    Ok(summary)
}

/// Write `contents` to a temporary file next to `target` and move it into
/// place only if `target` does not exist yet. Returns `false` when `target`
/// already exists.
fn write_new_file(target: &Path, contents: &[u8]) -> Result<bool> {
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::Builder::new()
        .prefix(".scrape-cleaner-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| CleanerError::filesystem(dir, e))?;

    tmp.write_all(contents)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| CleanerError::filesystem(tmp.path(), e))?;

    match tmp.persist_noclobber(target) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(CleanerError::filesystem(target, e.error)),
    }
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ai_client::{Provider, TextGenerator};
use serde::Deserialize;

use crate::error::{CleanerError, Result};
use crate::prompt::CleaningPrompt;

const DEFAULT_INPUT_DIR: &str = "input_files";
const DEFAULT_OUTPUT_DIR: &str = "output_files";

const ENV_CONFIG_FILE: &str = "SCRAPE_CLEANER_CONFIG";
const ENV_INPUT_DIR: &str = "SCRAPE_CLEANER_INPUT_DIR";
const ENV_OUTPUT_DIR: &str = "SCRAPE_CLEANER_OUTPUT_DIR";
const ENV_PROVIDER: &str = "SCRAPE_CLEANER_PROVIDER";
const ENV_MODEL: &str = "SCRAPE_CLEANER_MODEL";

/// Optional TOML file with the non-secret settings.
/// API keys stay in the environment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub provider: Option<Provider>,
    pub model: Option<String>,
    pub prompt_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CleanerError::filesystem(path, e))?;
        toml::from_str(&content).map_err(|e| {
            CleanerError::Config(format!(
                "failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}

/// Settings for one cleaning run, resolved once at startup.
/// Precedence: environment, then config file, then defaults.
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub provider: Provider,
    pub model: String,
    pub api_key: String,
    pub prompt_file: Option<PathBuf>,
}

impl CleanerConfig {
    /// Load `.env`, the optional config file named by `SCRAPE_CLEANER_CONFIG`,
    /// and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let env = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        let file = match env(ENV_CONFIG_FILE) {
            Some(path) => FileConfig::load(Path::new(&path))?,
            None => FileConfig::default(),
        };

        Self::resolve(file, env)
    }

    pub fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let file_provider = file.provider.unwrap_or_default();
        let provider = match env(ENV_PROVIDER) {
            Some(name) => name.parse::<Provider>()?,
            None => file_provider,
        };
        // A model from the file only makes sense for the provider it was written for.
        let file_model = file.model.filter(|_| provider == file_provider);

        let api_key = env(provider.api_key_env()).ok_or_else(|| {
            CleanerError::Config(format!(
                "{} environment variable is required for provider {provider}",
                provider.api_key_env()
            ))
        })?;

        Ok(Self {
            input_dir: env(ENV_INPUT_DIR)
                .map(PathBuf::from)
                .or(file.input_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            output_dir: env(ENV_OUTPUT_DIR)
                .map(PathBuf::from)
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            model: env(ENV_MODEL)
                .or(file_model)
                .unwrap_or_else(|| provider.default_model().to_string()),
            provider,
            api_key,
            prompt_file: file.prompt_file,
        })
    }

    pub fn generator(&self) -> Arc<dyn TextGenerator> {
        self.provider.generator(&self.api_key, &self.model)
    }

    pub fn prompt(&self) -> Result<CleaningPrompt> {
        match &self.prompt_file {
            Some(path) => CleaningPrompt::load(path),
            None => Ok(CleaningPrompt::builtin()),
        }
    }

    pub fn log_redacted(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  input_dir: {}", self.input_dir.display());
        tracing::info!("  output_dir: {}", self.output_dir.display());
        tracing::info!("  provider: {} ({})", self.provider, self.model);
        tracing::info!(
            "  {}: {}",
            self.provider.api_key_env(),
            redact_key(&self.api_key)
        );
        if let Some(ref path) = self.prompt_file {
            tracing::info!("  prompt_file: {}", path.display());
        }
    }
}

/// First few bytes of a secret plus its length in characters.
fn redact_key(val: &str) -> String {
    let shown = ai_client::truncate_to_char_boundary(val, 5);
    format!("{}...({} chars)", shown, val.chars().count())
}

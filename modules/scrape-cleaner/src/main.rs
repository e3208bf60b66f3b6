use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scrape_cleaner::{process_all, CleanerConfig, TextCleaner};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("scrape_cleaner=info".parse()?),
        )
        .init();

    info!("Scrape cleaner starting...");

    let config = CleanerConfig::from_env()?;
    config.log_redacted();

    let cleaner = TextCleaner::new(config.generator(), config.prompt()?);
    process_all(&config.input_dir, &config.output_dir, &cleaner).await?;

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use nft_scraper::{
    run, status_lines, PipelineConfig, DEFAULT_BASE_NAME, DEFAULT_EXTENSION, DEFAULT_INPUT,
};
use std::path::PathBuf;

/// Extract NFT cards from a saved marketplace page into a JSON file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Saved HTML of the listing page
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output file name without extension; a numeric suffix is added if taken
    #[arg(long, default_value = DEFAULT_BASE_NAME)]
    base_name: String,

    /// Output file extension
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = PipelineConfig {
        input: cli.input,
        base_name: cli.base_name,
        extension: cli.extension,
    };

    let outcome = run(&config)
        .with_context(|| format!("Failed to extract NFTs from {}", config.input.display()))?;

    for line in status_lines(&outcome, &config.input) {
        println!("{}", line);
    }

    Ok(())
}

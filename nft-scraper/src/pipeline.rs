use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::allocator::unique_output_path;
use crate::error::{Result, ScrapeError};
use crate::extract::{extract_records, NftRecord};

pub const DEFAULT_INPUT: &str = "index.html";
pub const DEFAULT_BASE_NAME: &str = "nft_collection";
pub const DEFAULT_EXTENSION: &str = ".json";

/// Where to read the saved listing page and how to name the output file.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub base_name: String,
    pub extension: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            base_name: DEFAULT_BASE_NAME.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Records were found and saved.
    Written { path: PathBuf, count: usize },
    /// The page parsed but no card had an image; nothing was saved.
    Empty,
    /// The input page does not exist; nothing was saved.
    InputMissing { path: PathBuf },
}

/// Console lines reporting how a run over `input` ended.
pub fn status_lines(outcome: &Outcome, input: &Path) -> Vec<String> {
    match outcome {
        Outcome::Written { path, count } => vec![
            format!("✅ Processed successfully! Items found: {}", count),
            format!("📁 Result saved to file: {}", path.display()),
        ],
        Outcome::Empty => vec![format!(
            "⚠️ No NFTs found. Check the contents of {}",
            input.display()
        )],
        Outcome::InputMissing { path } => vec![format!(
            "❌ Error: file '{}' not found. Save the page HTML to this file.",
            path.display()
        )],
    }
}

/// Reserves an output name, then reads, extracts and saves in a single pass.
pub fn run(config: &PipelineConfig) -> Result<Outcome> {
    let output_path = unique_output_path(&config.base_name, &config.extension)?;
    debug!("reserved output path {}", output_path.display());

    let html = match read_input(&config.input) {
        Ok(html) => html,
        Err(ScrapeError::InputNotFound { path }) => {
            warn!("input file {} does not exist", path.display());
            return Ok(Outcome::InputMissing { path });
        }
        Err(e) => return Err(e),
    };
    info!("read {} bytes from {}", html.len(), config.input.display());

    let records = extract_records(&html);
    if records.is_empty() {
        warn!("no NFT cards with an image in {}", config.input.display());
        return Ok(Outcome::Empty);
    }

    write_collection(&output_path, &records)?;
    info!("saved {} records to {}", records.len(), output_path.display());

    Ok(Outcome::Written {
        path: output_path,
        count: records.len(),
    })
}

pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ScrapeError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => ScrapeError::io(path, e),
    })?;

    String::from_utf8(bytes).map_err(|_| ScrapeError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}

/// Pretty JSON with four-space indentation. Non-ASCII text is kept as UTF-8
/// rather than escaped.
pub fn to_json(records: &[NftRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

pub fn write_collection(path: &Path, records: &[NftRecord]) -> Result<()> {
    let json = to_json(records)?;
    fs::write(path, json).map_err(|e| ScrapeError::io(path, e))
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("input file is not valid UTF-8: {}", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("no free output filename for {base}{ext} after {limit} attempts")]
    NoFreeFilename { base: String, ext: String, limit: u32 },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize NFT collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScrapeError::Io {
            path: path.into(),
            source,
        }
    }
}

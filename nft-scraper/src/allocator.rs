use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, ScrapeError};

/// Highest numeric suffix tried before giving up.
pub const MAX_SUFFIX: u32 = 10_000;

/// Returns the first path in `base.ext`, `base_1.ext`, `base_2.ext`, ... that
/// does not exist yet.
///
/// The check is a plain existence probe, so two processes allocating in the
/// same directory at the same time may get the same answer.
pub fn unique_output_path(base: &str, ext: &str) -> Result<PathBuf> {
    unique_output_path_within(base, ext, MAX_SUFFIX)
}

pub(crate) fn unique_output_path_within(base: &str, ext: &str, limit: u32) -> Result<PathBuf> {
    let candidate = PathBuf::from(format!("{}{}", base, ext));
    if !path_taken(&candidate)? {
        return Ok(candidate);
    }

    for counter in 1..=limit {
        let candidate = PathBuf::from(format!("{}_{}{}", base, counter, ext));
        if !path_taken(&candidate)? {
            debug!("{}{} is taken, using {}", base, ext, candidate.display());
            return Ok(candidate);
        }
    }

    Err(ScrapeError::NoFreeFilename {
        base: base.to_string(),
        ext: ext.to_string(),
        limit,
    })
}

fn path_taken(path: &Path) -> Result<bool> {
    fs::exists(path).map_err(|e| ScrapeError::io(path, e))
}

pub mod allocator;
pub mod error;
pub mod extract;
pub mod pipeline;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::allocator::unique_output_path;
pub use crate::error::{Result, ScrapeError};
pub use crate::extract::{extract_cards, extract_records, Card, NftRecord};
pub use crate::pipeline::{
    run, status_lines, to_json, write_collection, Outcome, PipelineConfig, DEFAULT_BASE_NAME,
    DEFAULT_EXTENSION, DEFAULT_INPUT,
};

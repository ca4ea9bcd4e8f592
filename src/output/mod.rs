//! Output module for crawl results
//!
//! This module handles:
//! - Writing the two-category JSON document
//! - Formatting end-of-run statistics

mod json;
pub mod stats;

pub use json::{format_results, write_results};
pub use stats::{format_statistics, print_statistics};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

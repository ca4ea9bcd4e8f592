//! JSON document output
//!
//! Writes the crawl result as:
//!
//! ```text
//! {
//!   "house": [ { "state_page": ..., "candidate": ..., "website": ..., "state": ... } ],
//!   "senate": [ ... ]
//! }
//! ```

use crate::model::CrawlResult;
use crate::output::OutputResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the crawl result as pretty-printed JSON
///
/// Any existing file at `output_path` is overwritten.
///
/// # Arguments
///
/// * `result` - The aggregated records
/// * `output_path` - Where the document is written
pub fn write_results(result: &CrawlResult, output_path: &Path) -> OutputResult<()> {
    let json = format_results(result)?;

    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;

    Ok(())
}

/// Formats the crawl result as pretty-printed JSON (2-space indent)
pub fn format_results(result: &CrawlResult) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

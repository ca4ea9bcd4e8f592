//! Crawler module for page fetching and processing
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching behind the `PageFetcher` trait
//! - HTML parsing of index and state pages
//! - Request pacing
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod index;
mod outcome;
mod parser;
mod phase;
mod scheduler;
mod state_page;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_url, HttpFetcher, PageFetcher};
pub use index::discover_state_links;
pub use outcome::{CategoryReport, CrawlReport, PageFailure, PageOutcome};
pub use parser::{extract_listing_items, extract_state_hrefs, ListingItem};
pub use phase::CrawlPhase;
pub use scheduler::Pacer;
pub use state_page::scrape_state_page;

use crate::config::Config;
use crate::output::write_results;
use crate::ScrapeError;
use std::path::Path;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Run the house pass, then the senate pass
/// 3. Write the JSON document to `config.output.json_path`
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed and the document was written
/// * `Err(ScrapeError)` - An index page failed or the document could not be written
pub async fn crawl(config: &Config) -> Result<CrawlReport, ScrapeError> {
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler)?;
    let mut coordinator = Coordinator::new(config, fetcher)?;

    let report = coordinator.run().await?;

    let path = Path::new(&config.output.json_path);
    write_results(&report.result, path)?;
    tracing::info!("Saved {}", path.display());

    Ok(report)
}

//! Campaign-sites: a polite scraper for candidate campaign websites
//!
//! This crate walks two chamber index pages (house and senate), follows every
//! per-state listing page they link to, keeps the list entries carrying the
//! configured party marker, and writes the aggregated records to a single
//! JSON document.

pub mod config;
pub mod crawler;
pub mod matcher;
pub mod model;
pub mod output;

use thiserror::Error;

/// Main error type for campaign-sites operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Invalid record: {0}")]
    Record(#[from] RecordError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid phase transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: crawler::CrawlPhase,
        to: crawler::CrawlPhase,
    },
}

/// Failure to retrieve a page
///
/// Raised for index pages this aborts the run; raised for a state page it only
/// costs that page's records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Network error for {url}: {reason}")]
    Network { url: String, reason: String },
}

impl FetchError {
    /// The URL that failed
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Network { url, .. } => url,
        }
    }
}

/// Candidate record validation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Not a state page URL: {0}")]
    InvalidStatePage(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for campaign-sites operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Coordinator, CrawlReport};
pub use matcher::{extract_candidate_name, is_state_link, AffiliationFilter};
pub use model::{CandidateRecord, Category, CrawlResult};

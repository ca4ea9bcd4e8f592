//! Configuration module for campaign-sites
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so running without a file crawls politics1.com
//! exactly as the built-in settings describe.
//!
//! # Example
//!
//! ```no_run
//! use campaign_sites::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Pacing interval: {}ms", config.crawler.request_interval_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, SiteConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;

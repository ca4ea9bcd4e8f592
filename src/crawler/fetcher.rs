//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with the identifying user agent
//! - GET requests returning the raw page markup
//! - Classifying failures into `FetchError`
//!
//! There is no retry and no cache; the caller decides whether a failure is
//! fatal.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Source of raw page markup
///
/// The coordinator only talks to this trait, so tests can serve fixture
/// markup without a network.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Fetches `url` and returns the response body
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `crawler` - Crawler settings supplying the request timeout
///
/// # Example
///
/// ```no_run
/// use campaign_sites::config::{CrawlerConfig, UserAgentConfig};
/// use campaign_sites::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(crawler.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// `PageFetcher` backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration and wraps it
    pub fn from_config(
        user_agent: &UserAgentConfig,
        crawler: &CrawlerConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(user_agent, crawler)?))
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        fetch_url(&self.client, url).await
    }
}

/// Fetches a URL and returns its body
///
/// # Error Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | body text |
/// | any other status | `FetchError::Status` |
/// | timeout | `FetchError::Network` ("Request timeout") |
/// | connection failure | `FetchError::Network` ("Connection refused") |
/// | body read failure | `FetchError::Network` |
pub async fn fetch_url(client: &Client, url: &Url) -> Result<String, FetchError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| network_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| network_error(url, e))
}

fn network_error(url: &Url, error: reqwest::Error) -> FetchError {
    let reason = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        "Connection refused".to_string()
    } else {
        error.to_string()
    };

    FetchError::Network {
        url: url.to_string(),
        reason,
    }
}

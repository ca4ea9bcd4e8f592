use serde::Deserialize;

/// Main configuration structure for campaign-sites
///
/// Every section is optional in the TOML file; missing sections and keys fall
/// back to the values that reproduce the default politics1.com crawl.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Source site layout
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL every index page and state link is resolved against
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Index page listing the house state pages
    #[serde(rename = "house-index")]
    pub house_index: String,

    /// Index page listing the senate state pages
    #[serde(rename = "senate-index")]
    pub senate_index: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://politics1.com/".to_string(),
            house_index: "congress.htm".to_string(),
            senate_index: "senate.htm".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Product token of the user agent
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Product version of the user agent
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// Email address for scraper-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl UserAgentConfig {
    /// Formats the user agent header value
    ///
    /// Format: `Name/Version (research scraper; contact: email)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (research scraper; contact: {})",
            self.crawler_name, self.crawler_version, self.contact_email
        )
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "Mozilla".to_string(),
            crawler_version: "5.0".to_string(),
            contact_email: "youremail@example.com".to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Minimum time between consecutive state page requests (milliseconds)
    #[serde(rename = "request-interval-ms")]
    pub request_interval_ms: u64,

    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Single-letter party code matched as "(X)" in listing text
    pub party: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            request_interval_ms: 2000,
            timeout_secs: 30,
            party: "D".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the JSON document written at the end of a run
    #[serde(rename = "json-path")]
    pub json_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_path: "dem_campaign_sites.json".to_string(),
        }
    }
}

use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// Keys missing from the file keep their defaults.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;

    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so two runs can be told apart by their settings.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let config_content = r#"
[site]
base-url = "https://mirror.example.org/"
house-index = "house.htm"
senate-index = "upper.htm"

[user-agent]
crawler-name = "CampaignBot"
crawler-version = "2.1"
contact-email = "research@example.org"

[crawler]
request-interval-ms = 500
timeout-secs = 10
party = "R"

[output]
json-path = "./out.json"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.site.base_url, "https://mirror.example.org/");
        assert_eq!(config.site.house_index, "house.htm");
        assert_eq!(config.site.senate_index, "upper.htm");
        assert_eq!(config.user_agent.crawler_name, "CampaignBot");
        assert_eq!(config.crawler.request_interval_ms, 500);
        assert_eq!(config.crawler.timeout_secs, 10);
        assert_eq!(config.crawler.party, "R");
        assert_eq!(config.output.json_path, "./out.json");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = create_temp_config("[crawler]\nparty = \"G\"\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.party, "G");
        assert_eq!(config.crawler.request_interval_ms, 2000);
        assert_eq!(config.site.base_url, "https://politics1.com/");
        assert_eq!(config.site.house_index, "congress.htm");
        assert_eq!(config.output.json_path, "dem_campaign_sites.json");
    }

    #[test]
    fn test_empty_file_is_default_config() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(
            config.user_agent.header_value(),
            "Mozilla/5.0 (research scraper; contact: youremail@example.com)"
        );
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[crawler]\nrequest-interval-ms = 5\n");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_load_config_with_hash() {
        let file = create_temp_config("[output]\njson-path = \"x.json\"\n");
        let (config, hash) = load_config_with_hash(file.path()).unwrap();
        assert_eq!(config.output.json_path, "x.json");
        assert_eq!(hash.len(), 64);
    }
}

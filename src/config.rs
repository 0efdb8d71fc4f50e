use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CrawlError;

/// Configuration for one crawl invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// URL of the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Directory holding the persisted JSON files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Frontier size limit; expansion stops once this many locations are
    /// discovered (checked before each round, so slightly more may land)
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Whether frontier discovery expands beyond the seed page
    #[serde(default)]
    pub recursive: bool,

    /// Per-page fetch deadline in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// When true (the default), a fetch timeout during extraction aborts
    /// the remaining batch; when false, only the timed-out location is
    /// skipped
    #[serde(default = "default_abort_on_timeout")]
    pub abort_on_timeout: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            data_dir: default_data_dir(),
            limit: default_limit(),
            recursive: false,
            fetch_timeout_secs: default_fetch_timeout_secs(),
            abort_on_timeout: default_abort_on_timeout(),
        }
    }
}

impl CrawlerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CrawlError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Apply the `WEBDRIVER_URL` environment variable, if set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
        self
    }
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_limit() -> usize {
    50
}

fn default_fetch_timeout_secs() -> u64 {
    45
}

fn default_abort_on_timeout() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlerConfig::default();
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert_eq!(config.limit, 50);
        assert!(!config.recursive);
        assert!(config.abort_on_timeout);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"limit": 5, "abort_on_timeout": false}"#).unwrap();

        let config = CrawlerConfig::from_file(&path).unwrap();
        assert_eq!(config.limit, 5);
        assert!(!config.abort_on_timeout);
        assert_eq!(config.fetch_timeout_secs, 45);
    }
}

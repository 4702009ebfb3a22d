//! App configuration
//!
//! Gateway address and locale settings, persisted as `config.json` in the data directory.

use crate::api::endpoints::LOCALE;
use crate::storage::{get_data_dir, read_json, write_json, StorageError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the gateway URL
pub const API_BASE_URL_ENV: &str = "CHALLENGE_API_BASE_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gateway URL the endpoint paths are joined onto
    pub api_base_url: String,
    /// Display locale used for amounts, e.g. "ko-KR"
    pub locale: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            locale: LOCALE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Replace empty or zero values with defaults
    pub fn validate(&mut self) {
        let defaults = Self::default();

        if self.api_base_url.trim().is_empty() {
            self.api_base_url = defaults.api_base_url;
        }
        if self.locale.trim().is_empty() {
            self.locale = defaults.locale;
        }
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = defaults.request_timeout_secs;
        }
    }

    /// Apply a gateway URL override (blank values are ignored)
    pub fn apply_base_url_override(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            tracing::info!("Using API base URL override: {}", url);
            self.api_base_url = url;
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn get_config_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("config.json"))
}

/// Load the configuration
///
/// Falls back to defaults if the file is corrupted, and writes them out on
/// first run. The
/// `CHALLENGE_API_BASE_URL` environment variable takes precedence over the file.
pub fn load_config() -> AppConfig {
    let mut config = match get_config_path().and_then(|path| load_config_from(&path)) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    };
    config.apply_base_url_override(std::env::var(API_BASE_URL_ENV).ok());
    config
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, StorageError> {
    let Some(mut config) = read_json::<AppConfig>(path)? else {
        tracing::info!("Config file not found, writing defaults to {}", path.display());
        let config = AppConfig::default();
        save_config_to(path, &config)?;
        return Ok(config);
    };
    config.validate();
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), StorageError> {
    write_json(path, config)?;
    tracing::debug!("Saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.locale, "ko-KR");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig {
            api_base_url: "  ".to_string(),
            locale: String::new(),
            request_timeout_secs: 0,
        };
        config.validate();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_base_url_override() {
        let mut config = AppConfig::default();
        config.apply_base_url_override(Some(" ".to_string()));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        config.apply_base_url_override(Some("https://gw.example.com".to_string()));
        assert_eq!(config.api_base_url, "https://gw.example.com");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "api_base_url": "http://gw:9000", "request_timeout_secs": 0 }"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.api_base_url, "http://gw:9000");
        assert_eq!(config.locale, "ko-KR");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = AppConfig {
            api_base_url: "http://gw:9000".to_string(),
            ..AppConfig::default()
        };

        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = load_config_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }
}

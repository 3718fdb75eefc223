use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/microbrew/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("microbrew").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`. Parsed files are validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint is an http(s) URL
    /// - The brewery type is not blank
    /// - Page size and tick rate are non-zero
    /// - The log level is a valid filter directive
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.endpoint_url()?;

        if self.source.brewery_type.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "brewery_type must not be empty".to_string(),
            });
        }

        if self.view.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "page_size must be at least 1".to_string(),
            });
        }

        if self.view.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be at least 1".to_string(),
            });
        }

        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.log.level) {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid log level '{}': {}", self.log.level, e),
            });
        }

        Ok(())
    }

    /// The endpoint parsed as an http(s) URL.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let endpoint = &self.source.endpoint;
        let url = Url::parse(endpoint).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid endpoint '{}': {}", endpoint, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("Endpoint '{}' must use http or https", endpoint),
            });
        }
        Ok(url)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.view.tick_rate_ms)
    }
}

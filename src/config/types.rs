use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::brewery::{DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZE, MICRO_CATEGORY};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Where the brewery list comes from and which records are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Listing endpoint (e.g., "https://api.openbrewerydb.org/breweries").
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Category retained after the fetch (default: "micro").
    #[serde(default = "default_brewery_type")]
    pub brewery_type: String,
}

/// Table presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Rows per page (default: 5).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// File logging. Off unless `file` (or `MICROBREW_LOG`) is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Base path; each run appends `.{timestamp}.{pid}`.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Default filter directive when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_brewery_type() -> String {
    MICRO_CATEGORY.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            brewery_type: default_brewery_type(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

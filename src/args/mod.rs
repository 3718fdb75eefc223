//! Command-line interface.
//!
//! Flags override the config file; query flags seed the starting view.

use std::path::PathBuf;

use clap::Parser;

use crate::brewery::{ListingQuery, SortDirection, SortKey, SortSpec};
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "microbrew", version, about = "Browse microbreweries in the terminal")]
pub struct Cli {
    /// Config file path (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the brewery listing endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override rows per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Initial search term (matches name or state)
    #[arg(long, value_name = "TERM", default_value = "")]
    pub search: String,

    /// Initial sort column
    #[arg(long, value_enum, default_value_t = SortKey::Name)]
    pub sort: SortKey,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,

    /// Initial zero-based page index
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub page: usize,

    /// Print one page as plain text and exit instead of opening the UI
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    /// Load the config file this invocation points at, then apply overrides.
    pub fn resolve_config(&self) -> Result<Config, crate::config::ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(page_size) = self.page_size {
            config.view.page_size = page_size;
        }
    }

    pub fn query(&self) -> ListingQuery {
        let direction = if self.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        ListingQuery {
            search: self.search.clone(),
            sort: SortSpec::new(self.sort, direction),
            page: self.page,
        }
    }
}

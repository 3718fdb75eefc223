//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use microbrew::brewery::BreweryRecord;
use std::path::PathBuf;
use tempfile::TempDir;

pub use mock_server::{MockResponse, MockServer};

/// A micro brewery record with a derived id.
pub fn micro(name: &str, state: &str) -> BreweryRecord {
    record(name, state, "micro")
}

pub fn record(name: &str, state: &str, category: &str) -> BreweryRecord {
    BreweryRecord {
        id: format!("{}-{}", name.to_lowercase().replace(' ', "-"), state.to_lowercase()),
        name: name.to_string(),
        category: category.to_string(),
        city: "Springfield".to_string(),
        state: state.to_string(),
        website_url: None,
    }
}

/// JSON body in the listing endpoint's shape.
pub fn breweries_json(entries: &[(&str, &str, &str, &str, Option<&str>)]) -> String {
    let values: Vec<serde_json::Value> = entries
        .iter()
        .enumerate()
        .map(|(i, (name, brewery_type, city, state, website))| {
            serde_json::json!({
                "id": format!("id-{i}"),
                "name": name,
                "brewery_type": brewery_type,
                "city": city,
                "state": state,
                "website_url": website,
                "country": "United States",
            })
        })
        .collect();
    serde_json::Value::Array(values).to_string()
}

/// Write `content` to a fresh `config.toml` inside a temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

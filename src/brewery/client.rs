//! One-shot fetch of the brewery list.

use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use super::record::BreweryRecord;
use crate::shutdown::ShutdownHandle;

/// Category kept by default.
pub const MICRO_CATEGORY: &str = "micro";

/// Listing endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.openbrewerydb.org/breweries";

/// Why the brewery list could not be loaded.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Network request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error fetching data: {}", .status.as_u16())]
    Status { status: StatusCode },

    #[error("Failed to parse brewery list: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Message shown in the error view. Never empty.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

pub struct BreweryClient {
    client: Client,
    endpoint: Url,
}

impl BreweryClient {
    pub fn new(endpoint: Url) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("microbrew/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Every record the endpoint returns, before category filtering.
    pub async fn fetch_all(&self) -> Result<Vec<BreweryRecord>, FetchError> {
        tracing::info!(endpoint = %self.endpoint, "fetching brewery list");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "brewery endpoint returned an error status");
            return Err(FetchError::Status { status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                url: self.endpoint.clone(),
                source,
            })?;
        let records: Vec<BreweryRecord> = serde_json::from_slice(&body)?;
        tracing::debug!(count = records.len(), "decoded brewery records");
        Ok(records)
    }

    /// Fetch and keep only records of `category`.
    pub async fn fetch_category(&self, category: &str) -> Result<Vec<BreweryRecord>, FetchError> {
        let records = self.fetch_all().await?;
        let kept = retain_category(records, category);
        tracing::info!(count = kept.len(), category, "brewery list ready");
        Ok(kept)
    }
}

/// Keep records whose category equals `category` exactly.
pub fn retain_category(records: Vec<BreweryRecord>, category: &str) -> Vec<BreweryRecord> {
    records
        .into_iter()
        .filter(|record| record.category == category)
        .collect()
}

/// Run the fetch unless the UI exits first.
///
/// Returns `None` when `shutdown` fires before the response arrives; the
/// request future is dropped at that point.
pub async fn fetch_until_shutdown(
    client: &BreweryClient,
    category: &str,
    shutdown: &ShutdownHandle,
) -> Option<Result<Vec<BreweryRecord>, FetchError>> {
    tokio::select! {
        result = client.fetch_category(category) => Some(result),
        _ = shutdown.wait() => {
            tracing::debug!("brewery fetch cancelled by shutdown");
            None
        }
    }
}

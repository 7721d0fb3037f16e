use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{domain::Record, error::FetchError};
use tracing::{debug, info, warn};
use url::Url;

/// Capability the controller depends on to obtain the raw listing.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Record>, FetchError>;
}

/// Fetches the listing with a single GET against a fixed endpoint.
///
/// Only transport and format correctness are checked here: the status must be
/// exactly 200 and the body must decode as a JSON array of records. Records
/// come back in the order received.
pub struct HttpDataFetcher {
    http: Client,
    endpoint: String,
}

impl HttpDataFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    fn request_target(&self) -> Result<Url, FetchError> {
        Url::parse(&self.endpoint).map_err(|e| {
            FetchError::transport(format!("invalid endpoint '{}': {e}", self.endpoint))
        })
    }
}

#[async_trait]
impl DataFetcher for HttpDataFetcher {
    async fn fetch(&self) -> Result<Vec<Record>, FetchError> {
        let url = self.request_target()?;
        info!(endpoint = %url, "fetch: requesting listing");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "fetch: unexpected status code");
            return Err(FetchError::InvalidStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(format!("failed to read body: {e}")))?;
        let records: Vec<Record> = serde_json::from_slice(&body)?;
        debug!(count = records.len(), "fetch: decoded listing");
        Ok(records)
    }
}

#[cfg(test)]
#[path = "tests/fetcher_tests.rs"]
mod tests;

//! HTTP client for the records service.

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, RecordQuery},
    transform::transform_data,
    types::{Record, Summary},
    Error,
};

/// Base URL used by [`Client::new`].
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Path of the records collection, relative to the base URL.
pub const RECORDS_PATH: &str = "/records";

/// HTTP client for the records service.
///
/// Each request builds a fresh `reqwest::Client`, so calls share no state.
/// No timeout is set; callers wanting one should wrap the returned future,
/// e.g. with `tokio::time::timeout`.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the service. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the default records service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", self.base_url(), path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        query.add_to_url(&url).ok_or_else(|| {
            tracing::error!("Query parameters out of range for {}", url);
            Error::RequestFailed
        })
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed
        })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::RequestFailed);
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse resource: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::RequestFailed
        })
    }

    /// Fetches one page of records and shapes it into a [`Summary`].
    ///
    /// Any failure is reported as [`Error::RequestFailed`].
    pub async fn retrieve(&self, query: &RecordQuery) -> Result<Summary, Error> {
        let records = self.get::<Vec<Record>, RecordQuery>(RECORDS_PATH, query).await?;
        tracing::debug!("Received {} records for page {}", records.len(), query.page());
        Ok(transform_data(&records, query.page()))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

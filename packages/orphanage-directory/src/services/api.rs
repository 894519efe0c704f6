use std::error::Error as _;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::models::{Orphanage, OrphanageSummary};
use crate::services::payload::CreatePayload;

const ORPHANAGES_PATH: &str = "orphanages";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Locations API request failed: {0}")]
    Request(String),

    #[error("Location not found")]
    NotFound,

    #[error("Locations API returned HTTP {0}")]
    Status(StatusCode),

    #[error("Failed to parse locations API response: {0}")]
    Decode(String),
}

impl ApiError {
    // Flatten the reqwest error chain so the cause ends up in the log line
    fn from_reqwest(e: reqwest::Error) -> Self {
        let mut message = e.to_string();
        let mut source = e.source();
        while let Some(err) = source {
            message.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }
        ApiError::Request(message)
    }
}

/// Client for the remote locations API
#[derive(Clone)]
pub struct OrphanageApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl OrphanageApi {
    /// `base_url` must end with a slash
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("orphanage-directory/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::from_reqwest)?;

        Ok(Self::with_client(client, base_url, timeout))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET orphanages`
    pub async fn list(&self) -> Result<Vec<OrphanageSummary>, ApiError> {
        let url = self.url(ORPHANAGES_PATH);
        debug!("Fetching orphanages from {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let response = check_status(response)?;
        let orphanages: Vec<OrphanageSummary> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        info!("Fetched {} orphanages", orphanages.len());
        Ok(orphanages)
    }

    /// `GET orphanages/{id}`
    pub async fn get(&self, id: u64) -> Result<Orphanage, ApiError> {
        let url = self.url(&format!("{}/{}", ORPHANAGES_PATH, id));
        debug!("Fetching orphanage {} from {}", id, url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        // Only a missing record is "not found"; elsewhere 404 is an API failure
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        let response = check_status(response)?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST orphanages` with a multipart body; any 2xx counts as success
    pub async fn create(&self, payload: CreatePayload) -> Result<(), ApiError> {
        let url = self.url(ORPHANAGES_PATH);
        let image_count = payload.images.len();
        let form = payload.into_form().map_err(ApiError::from_reqwest)?;

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        check_status(response)?;
        info!("Created orphanage with {} images", image_count);
        Ok(())
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        warn!("Locations API returned HTTP {}", status);
        return Err(ApiError::Status(status));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_base() {
        let api = OrphanageApi::new("http://api.local/v1/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.url(ORPHANAGES_PATH), "http://api.local/v1/orphanages");
        assert_eq!(api.url("orphanages/4"), "http://api.local/v1/orphanages/4");
    }

    #[tokio::test]
    async fn test_unreachable_api_is_request_error() {
        // Bind then drop a listener to get a port nobody serves
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let api = OrphanageApi::new(format!("http://127.0.0.1:{}/", port), Duration::from_secs(2)).unwrap();
        let result = api.list().await;
        assert!(matches!(result, Err(ApiError::Request(_))));
    }
}

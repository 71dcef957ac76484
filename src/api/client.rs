//! HTTP client for the photos endpoint.
//!
//! One `GET {base}/photos`, no headers, no query, no auth. The process shares a
//! single instance through [`ApiClient::shared`].

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{FetchError, ResourceSource};
use super::types::{Resource, decode_resources};
use crate::core::config::{BASE_URL, REQUEST_TIMEOUT, endpoint_url};

static SHARED_CLIENT: LazyLock<Arc<ApiClient>> = LazyLock::new(|| {
    info!("Creating shared API client for {}", BASE_URL);
    Arc::new(ApiClient::new(None))
});

pub struct ApiClient {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl ApiClient {
    /// Builds a standalone client. `None` uses the compiled-in base address.
    ///
    /// Most callers want [`ApiClient::shared`] instead; this exists so a client
    /// can be pointed at a local server.
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| BASE_URL.to_string());

        Self {
            endpoint: endpoint_url(&base_url),
            timeout: REQUEST_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    /// Replaces the per-request timeout (default `REQUEST_TIMEOUT`).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The process-wide client.
    ///
    /// Built on first call; concurrent first calls block until the one
    /// initializer finishes, and every call returns the same allocation.
    pub fn shared() -> Arc<ApiClient> {
        Arc::clone(&SHARED_CLIENT)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches and decodes the photo list.
    ///
    /// Transport failures (connect, timeout, reading the body) are
    /// `FetchError::Network`; a non-2xx status or an undecodable body is
    /// `FetchError::Protocol`.
    pub async fn fetch_resources(&self) -> Result<Vec<Resource>, FetchError> {
        debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                warn!("Photos request failed: {}", e);
                FetchError::Network(e.to_string())
            })?;

        let status = response.status();
        debug!("Photos response status: {}", status);

        if !status.is_success() {
            warn!("Photos endpoint returned HTTP {}", status.as_u16());
            return Err(FetchError::Protocol(format!(
                "unexpected HTTP status {}",
                status.as_u16()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let resources = decode_resources(&body).map_err(|msg| {
            warn!("Could not decode photos body ({} bytes): {}", body.len(), msg);
            FetchError::Protocol(msg)
        })?;

        info!("Fetched {} photos from {}", resources.len(), self.endpoint);
        Ok(resources)
    }
}

#[async_trait]
impl ResourceSource for ApiClient {
    fn name(&self) -> &str {
        "photos-api"
    }

    async fn fetch_resources(&self) -> Result<Vec<Resource>, FetchError> {
        ApiClient::fetch_resources(self).await
    }
}

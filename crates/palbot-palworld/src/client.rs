//! Palworld REST API client
//!
//! Authenticated with HTTP basic auth against the server's REST endpoint.
//! A non-200 answer or an undecodable body is reported as a single error;
//! the client deliberately has no retry or backoff.

use crate::models::{PlayerList, ServerMetrics};
use crate::traits::StatusSource;
use async_trait::async_trait;
use palbot_common::{PalbotError, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

const METRICS_PATH: &str = "v1/api/metrics";
const PLAYERS_PATH: &str = "v1/api/players";

/// Configuration for the Palworld API client
#[derive(Debug, Clone)]
pub struct PalworldClientConfig {
    /// Base URL of the REST API (e.g., "http://127.0.0.1:8212")
    pub base_url: String,
    /// Basic auth user name
    pub username: String,
    /// Basic auth password
    pub password: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl PalworldClientConfig {
    /// Create a new configuration with the minimum required parameters
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            timeout_secs: 10,
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Palworld API client
#[derive(Debug, Clone)]
pub struct PalworldClient {
    client: Client,
    base_url: Url,
    username: String,
    password: String,
}

impl PalworldClient {
    /// Create a new client with the given configuration
    pub fn new(config: PalworldClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PalbotError::network_with_source("Failed to create HTTP client", e))?;

        // Trailing slash so relative joins keep any path prefix of the host.
        let mut base = config.base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base_url = Url::parse(&base).map_err(|e| {
            PalbotError::config_with_source(format!("invalid Palworld host '{}'", config.base_url), e)
        })?;

        Ok(Self {
            client,
            base_url,
            username: config.username,
            password: config.password,
        })
    }

    /// Full URL of an API path.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PalbotError::config_with_source(format!("cannot build URL for {path}"), e))
    }

    #[instrument(skip(self), fields(host = %self.base_url))]
    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "Requesting status");

        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Status request failed");
                PalbotError::network_with_source("Status request failed", e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "Status API answered with an error");
            return Err(PalbotError::status_api_with_status(
                format!("status {} from server", status.as_u16()),
                status.as_u16(),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PalbotError::network_with_source("Failed to read response body", e))?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Undecodable status response");
            PalbotError::from(e)
        })
    }
}

#[async_trait]
impl StatusSource for PalworldClient {
    async fn fetch_metrics(&self) -> Result<ServerMetrics> {
        self.get_json(METRICS_PATH).await
    }

    async fn fetch_players(&self) -> Result<PlayerList> {
        self.get_json(PLAYERS_PATH).await
    }
}

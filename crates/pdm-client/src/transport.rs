//! HTTP transport for the orchestration API.
//!
//! The [`Transport`] trait is the seam between the client's state handling and
//! the network: it performs a single exchange and hands back the status and
//! body text without interpreting them.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single request/response exchange with the orchestration API.
///
/// Implementations must not retry and must not impose a timeout.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `body` verbatim as `POST {base}{path}` with a JSON content type.
    async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, ClientError>;

    /// Sends `GET {base}{path}`.
    async fn get(&self, path: &str) -> Result<RawResponse, ClientError>;

    /// Base URL requests are sent to.
    fn base_url(&self) -> &str;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: ClientConfig,
    client: Client,
}

impl HttpTransport {
    /// Creates a transport for the configured base URL. No request timeout is set.
    pub fn new(config: ClientConfig) -> Self {
        Self { config, client: Client::new() }
    }

    /// Uses a caller-built `reqwest` client (proxies, TLS roots, ...).
    pub fn with_client(config: ClientConfig, client: Client) -> Self {
        Self { config, client }
    }

    async fn finish(&self, url: &str, response: reqwest::Response) -> Result<RawResponse, ClientError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            error!(error = %e, url = %url, status, "Failed to read response body");
            ClientError::Decode(e.to_string())
        })?;
        debug!(url = %url, status, body_len = body.len(), "Orchestration API responded");
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, ClientError> {
        let url = self.config.endpoint(path);
        debug!(url = %url, body_len = body.len(), "Sending orchestration request");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, url = %url, "Failed to reach orchestration API");
                ClientError::Transport(e.to_string())
            })?;

        self.finish(&url, response).await
    }

    async fn get(&self, path: &str) -> Result<RawResponse, ClientError> {
        let url = self.config.endpoint(path);
        debug!(url = %url, "Sending GET request");

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(error = %e, url = %url, "Failed to reach orchestration API");
            ClientError::Transport(e.to_string())
        })?;

        self.finish(&url, response).await
    }

    fn base_url(&self) -> &str {
        &self.config.api_base
    }
}

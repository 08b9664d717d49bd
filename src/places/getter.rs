//! Upstream Getter
//!
//! Transport abstraction for fetching raw bytes from a URL, so tests can
//! substitute canned responses without network access.

use async_trait::async_trait;

use crate::error::{ProxyError, Result};

// == Getter Trait ==
/// Capability for performing an upstream GET request.
///
/// Pure transport: no retry or backoff lives here. Timeouts are whatever
/// the concrete transport enforces.
#[async_trait]
pub trait Getter: Send + Sync {
    /// Fetches the raw response body for `url`.
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}

// == HTTP Getter ==
/// Getter backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpGetter {
    client: reqwest::Client,
}

impl HttpGetter {
    /// Creates a new HttpGetter with a default reqwest client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Creates a new HttpGetter wrapping a preconfigured reqwest client,
    /// e.g. one with a custom timeout.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpGetter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Getter for HttpGetter {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProxyError::UpstreamUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProxyError::UpstreamUnavailable(format!(
                "upstream returned status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProxyError::UpstreamUnavailable(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

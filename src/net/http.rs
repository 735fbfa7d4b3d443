//! reqwest-backed network implementation.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use super::Network;
use crate::types::{FetchRequest, FetchResponse};
use crate::{Result, VordrError};

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// [`Network`] implementation over a shared [`reqwest::Client`].
///
/// ```rust
/// # use std::time::Duration;
/// # use vordr::HttpNetwork;
/// let network = HttpNetwork::new().timeout(Duration::from_secs(10));
/// ```
pub struct HttpNetwork {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpNetwork {
    /// Create a network with a fresh client and the default timeout.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a network over an existing client (shared connection pool).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for HttpNetwork {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Network for HttpNetwork {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| VordrError::Network(format!("invalid method: {e}")))?;

        let mut builder = self
            .client
            .request(method, request.url.clone())
            .timeout(self.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| VordrError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| VordrError::Network(e.to_string()))?
            .to_vec();

        Ok(FetchResponse {
            status,
            headers,
            body,
        })
    }
}

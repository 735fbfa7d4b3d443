//! The network capability.
//!
//! "The network" is opaque to the agent: one async [`fetch`](Network::fetch)
//! that either resolves to a response or fails with a connectivity-class
//! error. The bundled [`HttpNetwork`] is a reqwest-backed implementation;
//! tests and embedded hosts inject their own.
//!
//! A resolved response of any status (including 404 or 500) is a
//! *successful* fetch. Only connectivity, DNS, and timeout failures are
//! errors, and only those trigger the cache-fallback path.

pub mod http;

pub use http::HttpNetwork;

use async_trait::async_trait;

use crate::Result;
use crate::types::{FetchRequest, FetchResponse};

/// Capability to perform a live network fetch.
#[async_trait]
pub trait Network: Send + Sync {
    /// Fetch the request over the network.
    ///
    /// Fails with [`VordrError::Network`](crate::VordrError::Network) on
    /// connectivity/DNS/timeout errors.
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse>;
}

//! Request classification: bypass vs. fetch-and-cache.
//!
//! The router is intentionally simple: a pure function of the request
//! URL. It never consults or mutates the cache store, which keeps the
//! bypass guarantee ("no caching, no fallback") trivially true.

use url::{Origin, Url};

/// Where a request is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Forward straight to the network, untouched. No cache read or write.
    Bypass,
    /// Dispatch to the network-first fetch-and-cache strategy.
    FetchAndCache,
}

/// Classifies intercepted requests by URL.
///
/// Two rules, evaluated in order:
///
/// 1. a URL whose origin differs from the application origin is bypassed;
/// 2. a same-origin URL whose path starts with the API prefix is bypassed.
///
/// Everything else (same-origin documents and static assets) is routed to
/// the fetch-and-cache strategy.
#[derive(Debug, Clone)]
pub struct RequestRouter {
    origin: Origin,
    api_prefix: String,
}

impl RequestRouter {
    /// Create a router for the given application origin and API prefix.
    pub fn new(app_origin: &Url, api_prefix: impl Into<String>) -> Self {
        Self {
            origin: app_origin.origin(),
            api_prefix: api_prefix.into(),
        }
    }

    /// Classify a request URL.
    pub fn classify(&self, url: &Url) -> Route {
        if url.origin() != self.origin {
            return Route::Bypass;
        }
        if url.path().starts_with(&self.api_prefix) {
            return Route::Bypass;
        }
        Route::FetchAndCache
    }
}

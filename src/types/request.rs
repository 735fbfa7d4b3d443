//! Request identity and outgoing request description.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Identity of a request in the cache store: method plus full URL.
///
/// Acts as the store key. Two requests with the same method and URL are
/// the same cache entry; a later write for the key replaces the earlier
/// snapshot wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestKey {
    method: String,
    url: String,
}

impl RequestKey {
    /// Build a key from a method and URL. The method is upper-cased so
    /// `get` and `GET` identify the same entry.
    pub fn new(method: impl AsRef<str>, url: &Url) -> Self {
        Self {
            method: method.as_ref().to_ascii_uppercase(),
            url: url.to_string(),
        }
    }

    /// Key for a GET of the given URL.
    pub fn get(url: &Url) -> Self {
        Self::new("GET", url)
    }

    /// Request method (always upper-case).
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Full request URL as a string.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// An outgoing request intercepted by the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Request method (e.g. "GET").
    pub method: String,
    /// Absolute target URL.
    pub url: Url,
    /// Request headers.
    pub headers: HashMap<String, String>,
}

impl FetchRequest {
    /// Create a request with the given method and no headers.
    pub fn new(method: impl Into<String>, url: Url) -> Self {
        Self {
            method: method.into(),
            url,
            headers: HashMap::new(),
        }
    }

    /// Create a GET request.
    pub fn get(url: Url) -> Self {
        Self::new("GET", url)
    }

    /// Add a header (builder style).
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// The cache identity of this request.
    pub fn key(&self) -> RequestKey {
        RequestKey::new(&self.method, &self.url)
    }
}

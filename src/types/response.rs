//! Responses and their stored snapshots.
//!
//! A live [`FetchResponse`] and its stored [`Snapshot`] are deliberately
//! separate types: the snapshot is an explicit byte-for-byte duplication
//! taken via [`FetchResponse::snapshot()`] *before* either copy is
//! consumed. Once stored, a snapshot is never mutated: it is only
//! replaced wholesale by a later write for the same key, or deleted with
//! its generation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A response delivered to the caller, either live from the network or
/// rehydrated from a stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Create a response with the given status and empty body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Create a 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Add a header (builder style).
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Whether the status is in the 2xx range.
    ///
    /// A resolved non-2xx response is still a *successful* fetch as far
    /// as the network capability is concerned; this distinction only
    /// matters to callers that refuse to cache error pages (the shell
    /// preloader does, the request-time strategy does not).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Take an immutable snapshot of this response.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }
}

/// An immutable copy of a response's status, headers, and body, taken at
/// write time and owned by the cache store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    status: u16,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl Snapshot {
    /// HTTP status code at snapshot time.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Body bytes at snapshot time.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Rehydrate the snapshot into a deliverable response.
    pub fn into_response(self) -> FetchResponse {
        FetchResponse {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

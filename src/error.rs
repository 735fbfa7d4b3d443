//! Vordr error types

/// Vordr error types
#[derive(Debug, thiserror::Error)]
pub enum VordrError {
    // Network errors
    #[error("network error: {0}")]
    Network(String),

    // Store errors
    #[error("store error: {0}")]
    Store(String),

    // Host control errors
    #[error("host control error: {0}")]
    Control(String),

    // Data errors
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl VordrError {
    /// Whether this error represents a failed network fetch.
    ///
    /// Only network failures trigger the cache-fallback path of the
    /// fetch-and-cache strategy; store and configuration errors do not.
    pub fn is_network(&self) -> bool {
        matches!(self, VordrError::Network(_))
    }
}

/// Result type alias for Vordr operations
pub type Result<T> = std::result::Result<T, VordrError>;

//! Error types for fetching and configuration

use thiserror::Error;

/// Failure while loading country data.
///
/// Sources are flattened to strings so the error can be cloned into
/// UI messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid country code {0:?}")]
    InvalidCode(String),
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("no country found for code {0}")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

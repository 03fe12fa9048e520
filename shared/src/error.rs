//! Error types for fetches and the persistent cache.

use thiserror::Error;

/// Why a GET against the mock API produced no data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error: {0}")]
    Status(u16),
    /// The body was not the JSON we expected.
    #[error("parse error: {0}")]
    Decode(String),
}

/// Failures of the persistent key-value cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// No backing storage (private browsing, missing window, unwritable dir).
    #[error("storage unavailable")]
    Unavailable,
    /// The store refused the write.
    #[error("cache write failed: {0}")]
    Write(String),
    /// The value could not be serialized.
    #[error("cache encode failed: {0}")]
    Encode(String),
}

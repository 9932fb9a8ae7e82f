//! Error types for the HTTP client

use thiserror::Error;

/// Errors that can occur while talking to a device or remote service
#[derive(Debug, Error)]
pub enum HttpError {
    /// Connection, DNS, TLS or timeout failure; no response was received
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The response body exceeds the download limit
    #[error("Response body exceeds {0} bytes")]
    TooLarge(u64),
}

//! Error types for HTTP operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong in the transport. Every variant is reported
/// as a transport failure by the dispatcher; nothing is retried.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS errors and failures while streaming the response body.
    #[error("Connection error")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out under the transport's default timeout.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying client could not be created.
    #[error("Failed to create HTTP client")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
}

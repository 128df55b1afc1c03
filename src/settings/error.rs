//! Error types for webhook settings.

use thiserror::Error;

/// Error raised when the stored settings cannot describe a request.
///
/// These are detected before any network activity.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The persisted method ordinal is not one of the supported verbs.
    #[error("Unsupported method ordinal {0}: expected 0 (GET) through 6 (TRACE)")]
    UnsupportedMethod(i64),

    /// A verb name did not match any supported method.
    #[error("Unknown HTTP method '{0}': expected GET, HEAD, POST, PUT, DELETE, OPTIONS or TRACE")]
    UnknownMethodName(String),

    /// A settings payload could not be read into settings.
    #[error("Invalid settings payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

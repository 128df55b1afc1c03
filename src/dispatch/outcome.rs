//! The terminal result of one dispatch attempt.

use std::fmt;

use super::{DispatchError, ErrorKind};

/// What happened to one fired request.
///
/// Created at the end of a dispatch, handed to the
/// [`OutcomeSink`](super::OutcomeSink), then discarded.
///
/// Any completed HTTP exchange is a `Success`, whatever its status code;
/// interpreting 4xx/5xx is left to whoever reads the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The server answered.
    Success {
        /// Verb that was sent
        method: http::Method,
        /// Target URL as stored in the settings
        url: String,
        /// Response status
        status: http::StatusCode,
        /// Response body as text
        body: String,
    },

    /// No response was obtained.
    Failure {
        /// Failing stage
        kind: ErrorKind,
        /// Error message
        message: String,
        /// Underlying causes
        detail: String,
    },
}

impl DispatchOutcome {
    /// Builds the failure outcome for an error.
    #[must_use]
    pub fn failure(error: &DispatchError) -> Self {
        Self::Failure {
            kind: error.kind(),
            message: error.to_string(),
            detail: error.detail(),
        }
    }

    /// Returns `true` for a completed exchange.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the response status, if the exchange completed.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Success { status, .. } => Some(*status),
            Self::Failure { .. } => None,
        }
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success {
                method,
                url,
                status,
                body,
            } => write!(f, "{method} to {url} returned {}: {body}", status.as_u16()),
            Self::Failure {
                message, detail, ..
            } => write!(f, "{message}\n{detail}"),
        }
    }
}

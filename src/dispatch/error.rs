//! Error types surfaced by the dispatcher.

use thiserror::Error;

use crate::settings::ConfigurationError;
use crate::webhook::HttpError;

/// Failure while building or sending the request.
///
/// Covers everything from parsing the stored URL to streaming the
/// response body. Messages name only this layer; the underlying cause is
/// reachable through `source()`.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The stored URL could not be parsed.
    #[error("Invalid URL '{url}'")]
    InvalidUrl {
        /// The URL as stored
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// The stored content type is not a valid header value.
    #[error("Invalid content type '{value}'")]
    InvalidContentType {
        /// The content type as stored
        value: String,
        /// Header encoding error
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    /// The HTTP client failed to complete the exchange.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Which stage of a dispatch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The settings could not describe a request; nothing was sent.
    Configuration,
    /// The request could not be built or sent.
    Transport,
}

/// Error returned by a dispatch attempt.
///
/// Displays as the underlying error; the stage is available from
/// [`kind`](Self::kind).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Invalid settings, detected before any network activity.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Request construction or transport failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl DispatchError {
    /// Returns the failing stage.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Returns `true` if the request failed because no URL is configured.
    #[must_use]
    pub fn is_missing_url(&self) -> bool {
        matches!(
            self,
            Self::Transport(TransportError::InvalidUrl { url, .. }) if url.trim().is_empty()
        )
    }

    /// Returns the cause chain below this error, one cause per line.
    ///
    /// Falls back to the `Debug` form when there is no underlying cause.
    #[must_use]
    pub fn detail(&self) -> String {
        let mut causes = Vec::new();
        let mut current = std::error::Error::source(self);
        while let Some(cause) = current {
            causes.push(format!("caused by: {cause}"));
            current = cause.source();
        }

        if causes.is_empty() {
            format!("{self:?}")
        } else {
            causes.join("\n")
        }
    }
}

impl From<HttpError> for DispatchError {
    fn from(error: HttpError) -> Self {
        Self::Transport(TransportError::Http(error))
    }
}

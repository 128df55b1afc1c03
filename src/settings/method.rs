//! Request verbs and their persisted integer encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigurationError;

/// The HTTP verbs a webhook can be configured with.
///
/// The discriminants are the ordinals used in the persisted settings
/// document, so reordering variants is a breaking format change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum RequestMethod {
    /// `GET`
    #[default]
    Get = 0,
    /// `HEAD`
    Head = 1,
    /// `POST`
    Post = 2,
    /// `PUT`
    Put = 3,
    /// `DELETE`
    Delete = 4,
    /// `OPTIONS`
    Options = 5,
    /// `TRACE`
    Trace = 6,
}

impl RequestMethod {
    /// Every supported verb, in ordinal order.
    pub const ALL: [Self; 7] = [
        Self::Get,
        Self::Head,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Options,
        Self::Trace,
    ];

    /// Returns the verb token consumed by the HTTP layer.
    #[must_use]
    pub const fn as_http(self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Head => http::Method::HEAD,
            Self::Post => http::Method::POST,
            Self::Put => http::Method::PUT,
            Self::Delete => http::Method::DELETE,
            Self::Options => http::Method::OPTIONS,
            Self::Trace => http::Method::TRACE,
        }
    }

    /// Returns the upper-case verb name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
        }
    }

    /// Returns the persisted ordinal for this verb.
    #[must_use]
    pub const fn code(self) -> MethodCode {
        MethodCode(self as i64)
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMethod {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigurationError::UnknownMethodName(s.to_string()))
    }
}

impl TryFrom<MethodCode> for RequestMethod {
    type Error = ConfigurationError;

    fn try_from(code: MethodCode) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .ok_or(ConfigurationError::UnsupportedMethod(code.0))
    }
}

impl From<RequestMethod> for MethodCode {
    fn from(method: RequestMethod) -> Self {
        method.code()
    }
}

/// Raw method ordinal as stored in the settings document.
///
/// Stored settings are edited outside this crate and may carry any integer,
/// so the value is kept unvalidated until [`MethodCode::resolve`] is called
/// at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodCode(pub i64);

impl MethodCode {
    /// Maps the ordinal to one of the supported verbs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnsupportedMethod`] for any ordinal
    /// outside the seven known verbs.
    pub fn resolve(self) -> Result<RequestMethod, ConfigurationError> {
        RequestMethod::try_from(self)
    }
}

impl Default for MethodCode {
    fn default() -> Self {
        RequestMethod::default().code()
    }
}

impl fmt::Display for MethodCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolve() {
            Ok(method) => write!(f, "{method}"),
            Err(_) => write!(f, "<unsupported {}>", self.0),
        }
    }
}

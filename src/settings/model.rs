//! The webhook definition and its partial updates.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::{ConfigurationError, MethodCode, RequestMethod};

/// One webhook definition: where to send, how, and with what body.
///
/// Serialized as the settings document with keys `url`, `method`
/// (integer ordinal), `contentType` and `body`. Missing keys take their
/// default values when deserializing.
///
/// The URL is stored as given. It is only parsed when a request is built,
/// so a malformed URL surfaces as a dispatch failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Target endpoint.
    pub url: String,

    /// Request verb, as its persisted ordinal.
    pub method: MethodCode,

    /// Sent as the `Accept` header and as the body's `Content-Type`.
    pub content_type: String,

    /// Request body. Empty means no body is attached.
    pub body: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: RequestMethod::Get.code(),
            content_type: defaults::CONTENT_TYPE.to_string(),
            body: defaults::BODY.to_string(),
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings {{ url: {:?}, method: {}, content_type: {:?}, body: {} bytes }}",
            self.url,
            self.method,
            self.content_type,
            self.body.len(),
        )
    }
}

impl Settings {
    /// Returns the settings used when nothing has been stored yet.
    #[must_use]
    pub fn create_default() -> Self {
        Self::default()
    }

    /// Creates settings for the given URL and verb, with default content
    /// type and body.
    #[must_use]
    pub fn new(url: impl Into<String>, method: RequestMethod) -> Self {
        Self {
            url: url.into(),
            method: method.code(),
            ..Self::default()
        }
    }

    /// Sets the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Reads a full settings document, defaulting absent keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPayload`] if the value is not an
    /// object or a field has the wrong type.
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self, ConfigurationError> {
        Self::deserialize(payload).map_err(ConfigurationError::InvalidPayload)
    }

    /// Returns the settings as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Resolves the stored ordinal to a supported verb.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnsupportedMethod`] if the stored
    /// ordinal is out of range.
    pub fn resolve_method(&self) -> Result<RequestMethod, ConfigurationError> {
        self.method.resolve()
    }

    /// Returns `true` if a body should be attached to the request.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Overwrites the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(method) = patch.method {
            self.method = method;
        }
        if let Some(content_type) = patch.content_type {
            self.content_type = content_type;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
    }

    /// Returns a copy with `patch` applied.
    #[must_use]
    pub fn merged(mut self, patch: SettingsPatch) -> Self {
        self.apply(patch);
        self
    }
}

/// A partial settings update, as sent after the user edits one field.
///
/// Unknown keys are ignored so that hosts can send their whole payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    /// New target endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// New verb ordinal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<MethodCode>,

    /// New content type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// New body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl SettingsPatch {
    /// Reads a partial settings document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPayload`] if the value is not an
    /// object or a present field has the wrong type.
    pub fn from_value(payload: &serde_json::Value) -> Result<Self, ConfigurationError> {
        Self::deserialize(payload).map_err(ConfigurationError::InvalidPayload)
    }

    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.method.is_none()
            && self.content_type.is_none()
            && self.body.is_none()
    }
}

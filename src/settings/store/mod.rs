//! Settings persistence between invocations.
//!
//! This module provides abstractions for storing and retrieving the
//! settings document. The dispatcher never touches the store; it is owned
//! by the host-integration layer ([`crate::action`]).

mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use file::FileSettingsStore;

use std::io;

use thiserror::Error;

use super::Settings;

/// Result of loading settings from persistent storage.
///
/// Explicitly models all valid states:
/// - Successfully loaded settings
/// - No settings stored yet (first run)
/// - A document exists but could not be read
#[derive(Debug, Clone)]
pub enum LoadResult {
    /// Successfully loaded previously saved settings.
    Loaded(Settings),

    /// No settings document exists.
    NotFound,

    /// The settings document exists but could not be parsed.
    /// Callers should continue with defaults and overwrite on next save.
    Corrupted {
        /// Reason for corruption (for logging/debugging).
        reason: String,
    },
}

impl LoadResult {
    /// Returns the loaded settings, or defaults for `NotFound`/`Corrupted`.
    #[must_use]
    pub fn into_settings(self) -> Settings {
        match self {
            Self::Loaded(settings) => settings,
            Self::NotFound | Self::Corrupted { .. } => Settings::create_default(),
        }
    }

    /// Returns `true` if settings were successfully loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Errors that can occur while saving settings.
///
/// Read-side issues are modeled as [`LoadResult`] variants instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to write the settings file.
    #[error("Failed to write settings file: {0}")]
    Write(#[source] io::Error),

    /// Failed to serialize the settings document.
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The blocking save task did not complete.
    #[error("Settings save task failed: {0}")]
    Join(String),
}

/// Abstraction for persisting the settings document.
///
/// Implementations should:
/// - Use atomic writes so a crash never leaves a half-written document
/// - Return `LoadResult::NotFound` when nothing is stored
/// - Return `LoadResult::Corrupted` on unreadable content
pub trait SettingsStore: Send + Sync {
    /// Loads previously saved settings.
    fn load(&self) -> LoadResult;

    /// Saves the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    fn save(
        &self,
        settings: &Settings,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}

impl<T: SettingsStore> SettingsStore for std::sync::Arc<T> {
    fn load(&self) -> LoadResult {
        (**self).load()
    }

    fn save(
        &self,
        settings: &Settings,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send {
        (**self).save(settings)
    }
}

//! File-based settings persistence.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::settings::Settings;

use super::{LoadResult, SettingsStore, StoreError};

/// File-based implementation of [`SettingsStore`].
///
/// Stores the settings document as pretty-printed JSON.
///
/// # Atomic Writes
///
/// Uses write-to-temp-then-rename:
/// 1. Write to `{path}.tmp`
/// 2. Rename `{path}.tmp` to `{path}`
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Creates a store for the document at the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the settings document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if a document exists at the path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Performs the blocking save operation.
    ///
    /// Separated out so it can be wrapped in `spawn_blocking`.
    fn save_blocking(path: &Path, settings: &Settings) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(settings).map_err(StoreError::Serialize)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StoreError::Write)?;
            }
        }

        // settings.json -> settings.json.tmp, not settings.tmp
        let temp_path = PathBuf::from(format!("{}.tmp", path.display()));

        std::fs::write(&temp_path, content).map_err(StoreError::Write)?;
        std::fs::rename(&temp_path, path).map_err(StoreError::Write)?;

        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> LoadResult {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return LoadResult::NotFound,
            Err(e) => {
                return LoadResult::Corrupted {
                    reason: format!("Failed to read file: {e}"),
                };
            }
        };

        match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => LoadResult::Loaded(settings),
            Err(e) => LoadResult::Corrupted {
                reason: format!("Invalid JSON: {e}"),
            },
        }
    }

    async fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let path = self.path.clone();
        let settings = settings.clone();

        tracing::debug!("Saving settings to {}", path.display());

        tokio::task::spawn_blocking(move || Self::save_blocking(&path, &settings))
            .await
            .map_err(|e| StoreError::Join(e.to_string()))?
    }
}

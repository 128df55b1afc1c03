//! Host integration: one webhook action bound to its stored settings.
//!
//! [`WebhookAction`] owns the current [`Settings`], asks the store to
//! persist them whenever they change, and hands a snapshot to the
//! dispatcher on every trigger. The dispatcher itself never sees the store.

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::dispatch::{DispatchResult, Dispatcher, OutcomeSink, TracingSink};
use crate::settings::store::{LoadResult, SettingsStore, StoreError};
use crate::settings::{ConfigurationError, Settings, SettingsPatch};
use crate::webhook::HttpClient;

/// A configured webhook, ready to fire.
///
/// Saves are requested without waiting for them; use
/// [`flush`](Self::flush) to wait for the latest one (for example before
/// the process exits). Saves are applied in the order they were requested.
///
/// Dropping the action does not abort requests already fired: each
/// dispatch task holds its own reference to the dispatcher and still
/// reports its outcome.
pub struct WebhookAction<S, H, L = TracingSink> {
    settings: Settings,
    store: Arc<S>,
    dispatcher: Arc<Dispatcher<H, L>>,
    pending_save: Option<JoinHandle<Result<(), StoreError>>>,
}

impl<S, H, L> std::fmt::Debug for WebhookAction<S, H, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookAction")
            .field("settings", &self.settings)
            .field("pending_save", &self.pending_save.is_some())
            .finish_non_exhaustive()
    }
}

impl<S, H, L> WebhookAction<S, H, L>
where
    S: SettingsStore + 'static,
    H: HttpClient + 'static,
    L: OutcomeSink + 'static,
{
    /// Creates an action from the host's initial settings payload.
    ///
    /// A missing payload or an empty object means nothing was stored yet:
    /// defaults are used and a save is requested.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPayload`] if the payload is not
    /// a settings document.
    pub fn new(
        store: S,
        dispatcher: Dispatcher<H, L>,
        initial: Option<&serde_json::Value>,
    ) -> Result<Self, ConfigurationError> {
        let stored = match initial {
            Some(payload) if !is_empty_payload(payload) => Some(Settings::from_payload(payload)?),
            _ => None,
        };

        Ok(Self::with_settings(store, dispatcher, stored))
    }

    /// Creates an action from whatever the store holds.
    ///
    /// Missing settings fall back to defaults, which are then saved.
    /// Unreadable settings also fall back to defaults in memory, but the
    /// stored document is left as it is.
    ///
    /// Must be called from within a tokio runtime.
    pub fn from_store(store: S, dispatcher: Dispatcher<H, L>) -> Self {
        match store.load() {
            LoadResult::Loaded(settings) => Self::assemble(store, dispatcher, settings),
            LoadResult::NotFound => {
                tracing::info!("No stored settings found, using defaults");
                Self::with_settings(store, dispatcher, None)
            }
            LoadResult::Corrupted { reason } => {
                tracing::warn!(
                    "Stored settings unreadable ({reason}), using defaults without saving"
                );
                Self::assemble(store, dispatcher, Settings::create_default())
            }
        }
    }

    fn with_settings(store: S, dispatcher: Dispatcher<H, L>, stored: Option<Settings>) -> Self {
        match stored {
            Some(settings) => Self::assemble(store, dispatcher, settings),
            None => {
                let mut action = Self::assemble(store, dispatcher, Settings::create_default());
                action.persist();
                action
            }
        }
    }

    fn assemble(store: S, dispatcher: Dispatcher<H, L>, settings: Settings) -> Self {
        Self {
            settings,
            store: Arc::new(store),
            dispatcher: Arc::new(dispatcher),
            pending_save: None,
        }
    }

    /// Returns the current settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fires the webhook with a snapshot of the current settings.
    ///
    /// Returns immediately. The handle may be dropped; the outcome is
    /// reported by the dispatcher either way.
    pub fn trigger(&self) -> JoinHandle<DispatchResult> {
        tracing::debug!("Trigger received: {}", self.settings);
        self.dispatcher.fire(self.settings.clone())
    }

    /// Merges a partial settings payload sent by the host and saves the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPayload`] if the payload cannot
    /// be read; the current settings are left untouched.
    pub fn received_settings(
        &mut self,
        payload: &serde_json::Value,
    ) -> Result<(), ConfigurationError> {
        let patch = SettingsPatch::from_value(payload)?;
        self.update(patch);
        Ok(())
    }

    /// Merges `patch` into the current settings and saves the result.
    pub fn update(&mut self, patch: SettingsPatch) {
        self.settings.apply(patch);
        tracing::debug!("Settings updated: {}", self.settings);
        self.persist();
    }

    /// Requests a save of the current settings without waiting for it.
    ///
    /// Failures are logged.
    pub fn persist(&mut self) {
        let store = Arc::clone(&self.store);
        let snapshot = self.settings.clone();
        let previous = self.pending_save.take();

        self.pending_save = Some(tokio::spawn(async move {
            if let Some(previous) = previous {
                // Already logged by the earlier task.
                let _ = previous.await;
            }

            let result = store.save(&snapshot).await;
            if let Err(ref e) = result {
                tracing::error!("Failed to save settings: {e}");
            }
            result
        }));
    }

    /// Waits for the most recently requested save.
    ///
    /// # Errors
    ///
    /// Returns the save error, or [`StoreError::Join`] if the save task
    /// did not complete.
    pub async fn flush(&mut self) -> Result<(), StoreError> {
        match self.pending_save.take() {
            Some(handle) => handle
                .await
                .map_err(|e| StoreError::Join(e.to_string()))?,
            None => Ok(()),
        }
    }
}

/// Returns `true` for a payload that carries no settings at all.
fn is_empty_payload(payload: &serde_json::Value) -> bool {
    match payload {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

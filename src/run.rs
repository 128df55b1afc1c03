//! Application execution logic.
//!
//! This module runs one CLI command against the settings document.

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use webhook_action::action::WebhookAction;
use webhook_action::config::{Cli, Command, SetArgs};
use webhook_action::dispatch::{DispatchError, Dispatcher, ErrorKind};
use webhook_action::settings::Settings;
use webhook_action::settings::store::{FileSettingsStore, LoadResult, SettingsStore, StoreError};
use webhook_action::webhook::ReqwestClient;

use crate::app::exit_code;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The request could not be built or sent.
    #[error("Webhook dispatch failed: {0}")]
    Dispatch(#[source] DispatchError),

    /// The dispatch task panicked or was cancelled.
    #[error("Dispatch task failed: {0}")]
    Task(String),

    /// Failed to save the settings document.
    #[error("Failed to save settings: {0}")]
    Store(#[source] StoreError),

    /// `init` would overwrite an existing document.
    #[error("Settings already exist at '{}'", path.display())]
    SettingsExist {
        /// Path of the existing document
        path: PathBuf,
    },

    /// The stored document could not be read.
    #[error("Settings at '{}' are unreadable: {reason}", path.display())]
    CorruptedSettings {
        /// Path of the document
        path: PathBuf,
        /// Why it could not be read
        reason: String,
    },

    /// Failed to render the settings document.
    #[error("Failed to render settings: {0}")]
    Render(#[source] serde_json::Error),
}

impl RunError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::SettingsExist { .. } | Self::CorruptedSettings { .. } => exit_code::CONFIG_ERROR,
            Self::Dispatch(e) if e.kind() == ErrorKind::Configuration => exit_code::CONFIG_ERROR,
            _ => exit_code::runtime_error(),
        }
    }
}

/// Executes the selected command.
///
/// # Errors
///
/// Returns an error if the command fails; see [`RunError`].
pub async fn execute(cli: Cli) -> Result<(), RunError> {
    let store = FileSettingsStore::new(cli.settings_path());
    tracing::debug!("Using settings at {}", store.path().display());

    match cli.command {
        Command::Fire => fire(store).await,
        Command::Init { force } => init(&store, force).await,
        Command::Set(args) => set(store, args).await,
        Command::Show => show(&store),
    }
}

/// Sends the configured request once and waits for its outcome.
///
/// The wait only exists because the process would otherwise exit before
/// the request completes; the dispatch itself is fire-and-forget.
async fn fire(store: FileSettingsStore) -> Result<(), RunError> {
    ensure_readable(&store)?;

    let mut action = WebhookAction::from_store(store, Dispatcher::new(ReqwestClient::new()));

    let result = action
        .trigger()
        .await
        .map_err(|e| RunError::Task(e.to_string()))?;

    if let Err(e) = action.flush().await {
        tracing::warn!("Default settings were not saved: {e}");
    }

    result.map(|_| ()).map_err(RunError::Dispatch)
}

/// Writes the default settings document.
async fn init(store: &FileSettingsStore, force: bool) -> Result<(), RunError> {
    if store.exists() && !force {
        return Err(RunError::SettingsExist {
            path: store.path().to_path_buf(),
        });
    }

    store
        .save(&Settings::create_default())
        .await
        .map_err(RunError::Store)?;

    println!("Default settings written to: {}", store.path().display());
    Ok(())
}

/// Merges the given fields into the stored settings and saves them.
async fn set(store: FileSettingsStore, args: SetArgs) -> Result<(), RunError> {
    ensure_readable(&store)?;

    let patch = args.into_patch();
    if patch.is_empty() {
        tracing::warn!("No fields given, settings left unchanged");
    }

    let mut action = WebhookAction::from_store(store, Dispatcher::new(ReqwestClient::new()));
    action.update(patch);
    action.flush().await.map_err(RunError::Store)?;

    println!("{}", render(action.settings())?);
    Ok(())
}

/// Prints the stored settings, or the defaults if none are stored.
fn show(store: &FileSettingsStore) -> Result<(), RunError> {
    let settings = match store.load() {
        LoadResult::Loaded(settings) => settings,
        LoadResult::NotFound => {
            tracing::info!("No settings stored yet, showing defaults");
            Settings::create_default()
        }
        LoadResult::Corrupted { reason } => {
            return Err(RunError::CorruptedSettings {
                path: store.path().to_path_buf(),
                reason,
            });
        }
    };

    println!("{}", render(&settings)?);
    Ok(())
}

/// Refuses to work on a stored document that cannot be read, so it is
/// never replaced by defaults.
fn ensure_readable(store: &FileSettingsStore) -> Result<(), RunError> {
    match store.load() {
        LoadResult::Corrupted { reason } => Err(RunError::CorruptedSettings {
            path: store.path().to_path_buf(),
            reason,
        }),
        LoadResult::Loaded(_) | LoadResult::NotFound => Ok(()),
    }
}

/// Renders settings as the pretty-printed document.
fn render(settings: &Settings) -> Result<String, RunError> {
    serde_json::to_string_pretty(settings).map_err(RunError::Render)
}

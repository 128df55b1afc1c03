//! CLI argument parsing using clap.
//!
//! Defines the command-line host around the webhook action.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::settings::{RequestMethod, SettingsPatch, defaults};

/// webhook-action: fire a configured HTTP request and log the outcome
///
/// The request is described by a settings document that persists between
/// invocations. Edit it with `set`, inspect it with `show`, send it with
/// `fire`.
#[derive(Debug, Parser)]
#[command(name = "webhook-action")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to the settings document
    #[arg(long, short, global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for webhook-action
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send the configured request once and log the outcome
    Fire,

    /// Write the default settings document
    Init {
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },

    /// Change one or more settings and save them
    Set(SetArgs),

    /// Print the current settings document
    Show,
}

/// Fields accepted by the `set` subcommand.
///
/// Fields that are not given keep their stored value.
#[derive(Debug, Default, Args)]
pub struct SetArgs {
    /// Target URL
    #[arg(long)]
    pub url: Option<String>,

    /// HTTP method (GET, HEAD, POST, PUT, DELETE, OPTIONS, TRACE)
    #[arg(long)]
    pub method: Option<RequestMethod>,

    /// Media type sent as Accept and as the body's Content-Type
    #[arg(long = "content-type")]
    pub content_type: Option<String>,

    /// Request body (pass an empty string to send no body)
    #[arg(long)]
    pub body: Option<String>,
}

impl SetArgs {
    /// Converts the given flags into a settings patch.
    #[must_use]
    pub fn into_patch(self) -> SettingsPatch {
        SettingsPatch {
            url: self.url,
            method: self.method.map(RequestMethod::code),
            content_type: self.content_type,
            body: self.body,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the settings path, falling back to the platform default.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.settings.clone().unwrap_or_else(defaults::settings_path)
    }
}

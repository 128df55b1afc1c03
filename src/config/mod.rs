//! Command-line configuration for the webhook-action binary.
//!
//! This module provides CLI argument parsing ([`Cli`], [`Command`], [`SetArgs`]).
//!
//! The request itself is not configured here: it lives in the persisted
//! settings document (see [`crate::settings`]). The CLI only selects where
//! that document is, edits it, and triggers the request.

mod cli;


pub use cli::{Cli, Command, SetArgs};

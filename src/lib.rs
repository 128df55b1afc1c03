//! webhook-action: fire a configured HTTP request on a trigger.
//!
//! A library for sending one HTTP request per trigger event, described by
//! a persisted settings document, and reporting the outcome through
//! structured logging.
//!
//! Layers, leaves first:
//! - [`settings`]: the request description and its persistence
//! - [`webhook`]: the HTTP transport
//! - [`dispatch`]: building, sending and reporting one request
//! - [`action`]: the host-facing owner of settings, store and dispatcher
//! - [`config`]: command-line parsing for the binary

pub mod action;
pub mod config;
pub mod dispatch;
pub mod settings;
pub mod webhook;

//! Request dispatch: one fire signal, one request, one reported outcome.
//!
//! This module provides:
//! - Request construction from settings ([`build_request`])
//! - The dispatcher and its fire-and-forget entry point ([`Dispatcher`])
//! - Outcomes ([`DispatchOutcome`]) and where they go ([`OutcomeSink`], [`TracingSink`])
//! - The error taxonomy ([`DispatchError`], [`TransportError`], [`ErrorKind`])
//!
//! # Concurrency
//!
//! Each fire runs on its own tokio task and owns its request. Two fires in
//! quick succession run concurrently and complete in any order; nothing on
//! the dispatch path is shared mutably between them.

mod dispatcher;
mod error;
mod outcome;
mod sink;


pub use dispatcher::{DispatchResult, Dispatcher, build_request};
pub use error::{DispatchError, ErrorKind, TransportError};
pub use outcome::DispatchOutcome;
pub use sink::{OutcomeSink, TracingSink};

#[cfg(test)]
pub use sink::mock;

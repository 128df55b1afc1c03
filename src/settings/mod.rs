//! Webhook settings: the stored description of the request to fire.
//!
//! This module provides:
//! - The settings document ([`Settings`]) and partial updates ([`SettingsPatch`])
//! - Supported verbs ([`RequestMethod`]) and their persisted ordinal ([`MethodCode`])
//! - Persistence of the settings document ([`store`])
//! - Default values ([`defaults`])
//!
//! # Method ordinals
//!
//! The `method` key of the settings document is an integer:
//!
//! | ordinal | verb |
//! |---|---|
//! | 0 | GET |
//! | 1 | HEAD |
//! | 2 | POST |
//! | 3 | PUT |
//! | 4 | DELETE |
//! | 5 | OPTIONS |
//! | 6 | TRACE |
//!
//! Any other ordinal is kept as-is when loading and rejected with
//! [`ConfigurationError::UnsupportedMethod`] when a request is built.

pub mod defaults;
mod error;
mod method;
mod model;
pub mod store;


pub use error::ConfigurationError;
pub use method::{MethodCode, RequestMethod};
pub use model::{Settings, SettingsPatch};

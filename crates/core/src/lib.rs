//! Core functionality shared by the keysuite crates.
//!
//! This crate carries the ambient pieces every keysuite component uses:
//! configuration loading, logging initialisation and the core error type.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, DecodeConfig, LoggingConfig, SuiteConfig, DEFAULT_SUITE_TAG};
pub use error::{CoreError, Result};

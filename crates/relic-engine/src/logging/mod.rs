//! Logging utilities.
//!
//! This module centralizes logger initialization. Everything else in the crate
//! talks to the `log` facade only.

mod init;

pub use init::{init_logging, LogFormat, LoggingConfig};

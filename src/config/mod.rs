//! Configuration and constants.
//!
//! This module provides:
//! - Configuration constants (normalization defaults, timeouts, download settings)
//! - Batch configuration and CLI option types
//! - The command-line interface of the binary

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};

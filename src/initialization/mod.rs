//! Process-wide initialization.
//!
//! This module sets up the shared resources used by the binary and the batch
//! runner:
//! - Logger (plain or JSON)
//! - Blocking DNS resolver
//!
//! All initialization functions return `InitializationError` on failure.

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

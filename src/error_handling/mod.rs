//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (construction, configuration, TLD list, initialization)
//! - Processing statistics tracking (errors, warnings, info metrics)
//! - Retry strategy configuration
//!
//! Batch counters are categorized into:
//! - **Errors**: inputs that could not be decomposed
//! - **Warnings**: domains produced without optional data
//! - **Info**: informational metrics

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_domain_error, get_retry_strategy, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{
    ConfigurationError, DomainError, ErrorType, InfoType, InitializationError, MalformedReason,
    TldListError, WarningType,
};

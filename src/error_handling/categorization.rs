//! Error categorization and retry strategy.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::{DomainError, ErrorType, MalformedReason};

/// Creates an exponential backoff retry strategy.
///
/// Returns a retry strategy configured with:
/// - Initial delay: `RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: `RETRY_FACTOR`
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - Maximum attempts: `RETRY_MAX_ATTEMPTS`, counting the first one
///
/// `tokio_retry::Retry` makes one attempt per delay plus the first attempt,
/// so the iterator yields `RETRY_MAX_ATTEMPTS - 1` delays.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_INITIAL_DELAY_MS)
        .factor(crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(crate::config::RETRY_MAX_ATTEMPTS.saturating_sub(1))
}

/// Maps a construction failure onto the batch statistics category it is counted under.
pub fn categorize_domain_error(error: &DomainError) -> ErrorType {
    match error.reason() {
        MalformedReason::UnparseableUrl(_) => ErrorType::UnparseableUrl,
        MalformedReason::MissingHost => ErrorType::MissingHost,
        MalformedReason::EmptyDomain => ErrorType::EmptyDomain,
        MalformedReason::MissingDot => ErrorType::DomainWithoutDot,
    }
}

/// Records a construction failure in `stats`.
pub fn update_error_stats(stats: &super::ProcessingStats, error: &DomainError) {
    stats.increment_error(categorize_domain_error(error));
}

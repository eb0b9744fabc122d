//! Processing statistics tracking.
//!
//! Thread-safe counters for errors, warnings, and informational metrics
//! accumulated while a batch of inputs is decomposed.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// One atomic counter per variant of `T`, created up front so increments never allocate.
struct Counters<T> {
    counts: HashMap<T, AtomicUsize>,
}

impl<T> Counters<T>
where
    T: IntoEnumIterator + Eq + Hash + Copy + std::fmt::Debug,
{
    fn new() -> Self {
        Counters {
            counts: T::iter().map(|t| (t, AtomicUsize::new(0))).collect(),
        }
    }

    fn increment(&self, key: T) {
        match self.counts.get(&key) {
            Some(counter) => {
                counter.fetch_add(1, Ordering::Relaxed);
            }
            None => log::error!("No counter registered for {:?}", key),
        }
    }

    fn get(&self, key: T) -> usize {
        self.counts
            .get(&key)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    fn total(&self) -> usize {
        T::iter().map(|t| self.get(t)).sum()
    }
}

/// Thread-safe processing statistics tracker.
///
/// Tracks errors, warnings, and informational metrics using atomic counters,
/// so it can be shared by reference across the worker threads of a batch.
///
/// # Categories
///
/// - **Errors**: inputs that could not be decomposed
/// - **Warnings**: domains produced without optional data (e.g. no IP address)
/// - **Info**: notable inputs (IP literals, effective TLDs, skipped lines)
pub struct ProcessingStats {
    errors: Counters<ErrorType>,
    warnings: Counters<WarningType>,
    info: Counters<InfoType>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            errors: Counters::new(),
            warnings: Counters::new(),
            info: Counters::new(),
        }
    }

    pub fn increment_error(&self, error: ErrorType) {
        self.errors.increment(error);
    }

    pub fn increment_warning(&self, warning: WarningType) {
        self.warnings.increment(warning);
    }

    pub fn increment_info(&self, info_type: InfoType) {
        self.info.increment(info_type);
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(error)
    }

    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(warning)
    }

    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info.get(info_type)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        self.errors.total()
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        self.warnings.total()
    }

    /// Get total info count across all info types.
    pub fn total_info(&self) -> usize {
        self.info.total()
    }

    /// Logs every non-zero counter at info level.
    pub fn log_summary(&self) {
        for error in ErrorType::iter() {
            let count = self.get_error_count(error);
            if count > 0 {
                log::info!("   {error}: {count}");
            }
        }
        for warning in WarningType::iter() {
            let count = self.get_warning_count(warning);
            if count > 0 {
                log::info!("   {warning}: {count}");
            }
        }
        for info_type in InfoType::iter() {
            let count = self.get_info_count(info_type);
            if count > 0 {
                log::info!("   {info_type}: {count}");
            }
        }
    }
}

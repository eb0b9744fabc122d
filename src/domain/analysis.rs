//! Per-domain analysis results.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Insertion-ordered map from analysis-criterion name to integer result.
///
/// This is the only mutable part of a `Domain`. A single mutex guards both
/// reads and writes, so any thread holding a shared reference may record or
/// read results. Iteration is only offered as a cloned [`snapshot`](Self::snapshot).
#[derive(Debug, Default)]
pub struct AnalysisData {
    entries: Mutex<Vec<(String, i64)>>,
}

impl AnalysisData {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic in another holder cannot leave the Vec half-updated, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<(String, i64)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the value recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.lock()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    /// Records `value` for `key`, returning the previous value.
    ///
    /// Overwriting a key keeps its original insertion position.
    pub fn set(&self, key: impl Into<String>, value: i64) -> Option<i64> {
        let key = key.into();
        let mut entries = self.lock();
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                entries.push((key, value));
                None
            }
        }
    }

    /// Read-modify-write under one lock acquisition; returns the stored value.
    pub fn update<F>(&self, key: &str, f: F) -> i64
    where
        F: FnOnce(Option<i64>) -> i64,
    {
        let mut entries = self.lock();
        match entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => {
                *existing = f(Some(*existing));
                *existing
            }
            None => {
                let value = f(None);
                entries.push((key.to_string(), value));
                value
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of all entries in insertion order.
    pub fn snapshot(&self) -> Vec<(String, i64)> {
        self.lock().clone()
    }
}

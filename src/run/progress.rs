//! Progress logging for batch runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::info;

use crate::config::LOGGING_INTERVAL;

/// Counts processed lines and logs throughput every `LOGGING_INTERVAL` lines.
pub(crate) struct Progress {
    start_time: Instant,
    processed: AtomicUsize,
    total: usize,
}

impl Progress {
    pub(crate) fn new(total: usize) -> Self {
        Progress {
            start_time: Instant::now(),
            processed: AtomicUsize::new(0),
            total,
        }
    }

    pub(crate) fn tick(&self) {
        let processed = self.processed.fetch_add(1, Ordering::Relaxed) + 1;
        if processed % LOGGING_INTERVAL == 0 {
            self.log();
        }
    }

    pub(crate) fn log(&self) {
        let processed = self.processed.load(Ordering::SeqCst);
        let elapsed_secs = self.elapsed_seconds();
        let rate = if elapsed_secs > 0.0 {
            processed as f64 / elapsed_secs
        } else {
            0.0
        };
        info!(
            "Processed {}/{} lines in {:.2} seconds (~{:.2} lines/sec)",
            processed, self.total, elapsed_secs, rate
        );
    }

    pub(crate) fn elapsed_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

//! Run-level report types

use std::time::Duration;

use crate::outcome::{RequestFailure, RequestSuccess};

/// Aggregate of all per-request outcomes for one run
///
/// Ordering within `successes` and `failures` reflects completion order
/// within each batch, not global request order, since tasks of a batch run
/// concurrently. On completion every index in `[0, total_requests)` appears
/// exactly once across the two collections.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Requests that completed an HTTP exchange, in completion order
    pub successes: Vec<RequestSuccess>,

    /// Requests that failed, in completion order
    pub failures: Vec<RequestFailure>,

    /// Wall-clock duration of the whole run
    pub total_elapsed: Duration,

    /// Number of batches the scheduler executed
    pub batches_executed: usize,
}

impl RunReport {
    /// Total number of completed requests (successes + failures)
    pub fn total_requests(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    /// Fraction of requests that succeeded (0.0 - 1.0)
    pub fn success_rate(&self) -> f64 {
        let total = self.total_requests();
        if total > 0 {
            self.successes.len() as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Overall completed requests per second
    pub fn requests_per_second(&self) -> f64 {
        let secs = self.total_elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total_requests() as f64 / secs
        } else {
            0.0
        }
    }
}

//! Concurrency-safe outcome aggregation

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use indicatif::ProgressBar;
use tokio::sync::Mutex;

use crate::outcome::{RequestFailure, RequestOutcome, RequestSuccess};
use crate::report::RunReport;

/// Collects per-request outcomes produced by concurrent tasks
///
/// The success and failure collections are the run's only shared mutable
/// state. Each `record` call is a single locked append, so no outcome can
/// be lost or duplicated under concurrent completion; no ordering is
/// guaranteed across concurrent calls.
pub struct RunCollector {
    successes: Mutex<Vec<RequestSuccess>>,
    failures: Mutex<Vec<RequestFailure>>,
    completed: AtomicUsize,
    progress: Option<ProgressBar>,
}

impl RunCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self {
            successes: Mutex::new(Vec::new()),
            failures: Mutex::new(Vec::new()),
            completed: AtomicUsize::new(0),
            progress: None,
        }
    }

    /// Attach a progress bar ticked once per completed request
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Record one outcome
    pub async fn record(&self, outcome: RequestOutcome) {
        match outcome {
            RequestOutcome::Success(success) => {
                self.successes.lock().await.push(success);
            }
            RequestOutcome::Failure(failure) => {
                tracing::warn!(index = failure.index, error = %failure.error, "request failed");
                self.failures.lock().await.push(failure);
            }
        }

        self.completed.fetch_add(1, Ordering::SeqCst);
        if let Some(progress) = &self.progress {
            progress.inc(1);
        }
    }

    /// Number of outcomes recorded so far
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Drain the collections into a run report
    ///
    /// Call only after every batch task has been joined; outcomes recorded
    /// after this point are not reflected in the report.
    pub async fn finalize(&self, total_elapsed: Duration, batches_executed: usize) -> RunReport {
        if let Some(progress) = &self.progress {
            progress.finish();
        }

        RunReport {
            successes: std::mem::take(&mut *self.successes.lock().await),
            failures: std::mem::take(&mut *self.failures.lock().await),
            total_elapsed,
            batches_executed,
        }
    }
}

impl Default for RunCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RunCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunCollector")
            .field("completed", &self.completed())
            .finish()
    }
}

//! Run orchestration and batch scheduling

use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use crate::client::{RequestExecutor, TranslateClient};
use crate::config::RunConfig;
use crate::error::Result;
use crate::outcome::RequestOutcome;
use crate::report::RunReport;
use crate::request::RequestTask;

use super::batch::batch_ranges;
use super::collector::RunCollector;
use super::pacer::Pacer;

/// Drives a complete load-generation run
///
/// Owns the run lifecycle: configuration validation, the shared HTTP
/// session, the sequential batch loop with bounded in-batch concurrency,
/// and final report assembly. Per-request failures are recorded in the
/// report and never surface as run-level errors.
pub struct Runner {
    config: RunConfig,
    executor: Arc<dyn RequestExecutor>,
    pacer: Pacer,
    show_progress: bool,
}

impl Runner {
    /// Create a runner backed by the shared HTTP client
    ///
    /// # Errors
    /// Returns an error for an invalid configuration or if the shared
    /// client cannot be built; both abort before any batch executes.
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        let client = TranslateClient::new(&config)?;
        Self::with_executor(config, Arc::new(client))
    }

    /// Create a runner with a custom request executor
    ///
    /// # Errors
    /// Returns an error for an invalid configuration.
    pub fn with_executor(config: RunConfig, executor: Arc<dyn RequestExecutor>) -> Result<Self> {
        config.validate()?;
        let pacer = Pacer::new(config.rate_limit);

        Ok(Self {
            config,
            executor,
            pacer,
            show_progress: false,
        })
    }

    /// Render a progress bar while the run executes
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// The run configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Execute every batch and assemble the final report
    pub async fn run(&self) -> Result<RunReport> {
        let total = self.config.total_requests;
        let start = Instant::now();

        tracing::info!(
            total_requests = total,
            batch_size = self.config.batch_size,
            rate_limit = self.config.rate_limit,
            "starting run"
        );

        let mut collector = RunCollector::new();
        if self.show_progress {
            collector = collector.with_progress(Self::progress_bar(total));
        }
        let collector = Arc::new(collector);

        let mut batches_executed = 0;
        for range in batch_ranges(total, self.config.batch_size) {
            tracing::debug!(
                batch = batches_executed,
                start = range.start,
                end = range.end,
                "starting batch"
            );
            self.run_batch(range, &collector).await;
            batches_executed += 1;
        }

        let report = collector.finalize(start.elapsed(), batches_executed).await;

        tracing::info!(
            elapsed_secs = report.total_elapsed.as_secs_f64(),
            successes = report.successes.len(),
            failures = report.failures.len(),
            batches = report.batches_executed,
            "run complete"
        );

        Ok(report)
    }

    /// Execute one batch: pace initiations, spawn every task, join them all
    ///
    /// All tasks of the batch are started before any is awaited, so the
    /// batch boundary is the only join point. A panicked task becomes a
    /// failure entry for its index instead of aborting its siblings.
    async fn run_batch(&self, range: Range<usize>, collector: &Arc<RunCollector>) {
        let mut handles = Vec::with_capacity(range.len());

        for index in range {
            self.pacer.pause().await;

            let executor = Arc::clone(&self.executor);
            let collector = Arc::clone(collector);
            let handle = tokio::spawn(async move {
                let outcome = executor.execute(RequestTask::new(index)).await;
                collector.record(outcome).await;
            });
            handles.push((index, handle));
        }

        for (index, handle) in handles {
            if let Err(e) = handle.await {
                tracing::error!(index, error = %e, "request task panicked");
                collector
                    .record(RequestOutcome::failure(index, format!("task panicked: {e}")))
                    .await;
            }
        }
    }

    fn progress_bar(total: usize) -> ProgressBar {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        bar
    }
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("config", &self.config)
            .field("pacer", &self.pacer)
            .field("show_progress", &self.show_progress)
            .finish()
    }
}

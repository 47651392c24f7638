//! Batch-scheduled request execution
//!
//! The runner is the core of the harness, built as a two-level schedule:
//! batches execute strictly in order, and the tasks of one batch run
//! concurrently. That bounds peak concurrency to the batch size and keeps
//! rate-limit pacing a simple sequential delay at initiation time.
//!
//! For each batch the scheduler:
//!
//! 1. Waits one pacing interval per task before starting it
//! 2. Spawns every task of the batch before awaiting any of them
//! 3. Joins the whole batch, converting panics into failure entries
//! 4. Moves to the next batch
//!
//! # Example
//!
//! ```ignore
//! use translate_bench::{RunConfig, Runner};
//!
//! let config = RunConfig::new("https://example.com/translate")
//!     .with_payload("hello", "wolof")
//!     .with_batch_size(10)
//!     .with_rate_limit(5.0)
//!     .with_total_requests(23);
//!
//! let report = Runner::new(config)?.run().await?;
//! println!("{} ok, {} failed", report.successes.len(), report.failures.len());
//! ```

mod batch;
mod collector;
mod executor;
mod pacer;

pub use batch::batch_ranges;
pub use collector::RunCollector;
pub use executor::Runner;
pub use pacer::Pacer;

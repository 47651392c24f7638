//! HTTP execution of individual requests
//!
//! The scheduler talks to the network through the `RequestExecutor` trait
//! so that tests can substitute stub implementations. The production
//! implementation is `TranslateClient`, which wraps the shared
//! `reqwest::Client` for a run.

mod translate;

pub use translate::TranslateClient;

use async_trait::async_trait;

use crate::outcome::RequestOutcome;
use crate::request::RequestTask;

/// Executes a single request and reports its outcome as a value
///
/// Implementations must convert every transport, timeout, and decode
/// failure into `RequestOutcome::Failure`; `execute` never fails past its
/// own boundary.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Send the request identified by `task` and report its outcome
    async fn execute(&self, task: RequestTask) -> RequestOutcome;
}

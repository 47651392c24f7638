//! Error types for translate-bench
//!
//! Per-request failures are values (`RequestOutcome::Failure`), never
//! errors. This enum covers only the fatal, run-aborting conditions.

use thiserror::Error;

/// Crate error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid run configuration
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The shared HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// IO error while persisting results
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while persisting results
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

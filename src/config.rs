//! Run configuration types

use std::time::Duration;

/// Default number of requests per batch
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Default maximum request initiations per second
pub const DEFAULT_RATE_LIMIT: f64 = 10.0;

/// Default total number of requests for a run
pub const DEFAULT_TOTAL_REQUESTS: usize = 100;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a load-generation run
///
/// Supplied once at run start and never mutated during a run. The payload
/// shape is fixed per run: every request carries the same `text` and
/// `to_lang` values.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Target endpoint URL
    pub url: String,

    /// Text sent in every request payload
    pub text: String,

    /// Target language code sent in every request payload
    pub to_lang: String,

    /// Bearer token for the Authorization header
    pub token: String,

    /// Number of requests per batch (bounds peak concurrency)
    pub batch_size: usize,

    /// Maximum request initiations per second
    pub rate_limit: f64,

    /// Total number of requests to send
    pub total_requests: usize,

    /// Per-request timeout
    pub timeout: Duration,
}

impl RunConfig {
    /// Create a config for the given endpoint with default limits
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: String::new(),
            to_lang: String::new(),
            token: String::new(),
            batch_size: DEFAULT_BATCH_SIZE,
            rate_limit: DEFAULT_RATE_LIMIT,
            total_requests: DEFAULT_TOTAL_REQUESTS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the request payload fields
    pub fn with_payload(mut self, text: impl Into<String>, to_lang: impl Into<String>) -> Self {
        self.text = text.into();
        self.to_lang = to_lang.into();
        self
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Set the batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the rate limit (requests per second)
    pub fn with_rate_limit(mut self, rps: f64) -> Self {
        self.rate_limit = rps;
        self
    }

    /// Set the total request count
    pub fn with_total_requests(mut self, total: usize) -> Self {
        self.total_requests = total;
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns an error for a zero batch size or a non-positive rate limit.
    /// A zero total request count is valid and produces an empty run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize(
                "batch size must be at least 1".into(),
            ));
        }

        if self.rate_limit <= 0.0 {
            return Err(ConfigError::InvalidRateLimit(
                "rate limit must be positive".into(),
            ));
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid batch size
    #[error("Invalid batch size: {0}")]
    InvalidBatchSize(String),

    /// Invalid rate limit
    #[error("Invalid rate limit: {0}")]
    InvalidRateLimit(String),
}

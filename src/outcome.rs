//! Per-request outcome types
//!
//! Every completed task produces exactly one `RequestOutcome` variant. The
//! executor converts all of its failure modes into values, so a bad request
//! can never abort sibling tasks or the run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A request that completed an HTTP exchange
///
/// Any status code counts as a success at this layer; a non-2xx response is
/// still a completed exchange with the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSuccess {
    /// Position of the request within the run
    pub index: usize,

    /// HTTP status code returned by the server
    pub status: u16,

    /// Decoded JSON response body
    pub body: serde_json::Value,

    /// Completion time
    pub timestamp: DateTime<Utc>,
}

/// A request that failed in transport, timed out, or returned a non-JSON body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestFailure {
    /// Position of the request within the run
    pub index: usize,

    /// Human-readable failure description
    pub error: String,

    /// Completion time
    pub timestamp: DateTime<Utc>,
}

/// Tagged outcome of one request
#[derive(Debug, Clone)]
pub enum RequestOutcome {
    /// Completed HTTP exchange, any status code
    Success(RequestSuccess),

    /// Transport failure, timeout, decode failure, or task panic
    Failure(RequestFailure),
}

impl RequestOutcome {
    /// Build a success outcome stamped with the current time
    pub fn success(index: usize, status: u16, body: serde_json::Value) -> Self {
        Self::Success(RequestSuccess {
            index,
            status,
            body,
            timestamp: Utc::now(),
        })
    }

    /// Build a failure outcome stamped with the current time
    pub fn failure(index: usize, error: impl Into<String>) -> Self {
        Self::Failure(RequestFailure {
            index,
            error: error.into(),
            timestamp: Utc::now(),
        })
    }

    /// Index of the underlying request
    pub fn index(&self) -> usize {
        match self {
            Self::Success(s) => s.index,
            Self::Failure(f) => f.index,
        }
    }

    /// Whether this outcome is the success variant
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_json_format() {
        let outcome = RequestOutcome::success(3, 200, serde_json::json!({"translated": "ok"}));
        let RequestOutcome::Success(success) = outcome else {
            panic!("Expected Success variant");
        };

        let json = serde_json::to_string(&success).unwrap();
        assert!(json.contains("\"index\":3"));
        assert!(json.contains("\"status\":200"));
        assert!(json.contains("\"translated\":\"ok\""));
        // chrono serializes DateTime<Utc> as ISO-8601 / RFC 3339
        assert!(json.contains("\"timestamp\":\"20"));
        assert!(json.contains('T'));
    }

    #[test]
    fn test_failure_json_format() {
        let outcome = RequestOutcome::failure(5, "connection refused");
        let RequestOutcome::Failure(failure) = outcome else {
            panic!("Expected Failure variant");
        };

        let json = serde_json::to_string(&failure).unwrap();
        assert!(json.contains("\"index\":5"));
        assert!(json.contains("\"error\":\"connection refused\""));
    }

    #[test]
    fn test_outcome_accessors() {
        let success = RequestOutcome::success(1, 404, serde_json::json!({}));
        assert_eq!(success.index(), 1);
        assert!(success.is_success());

        let failure = RequestOutcome::failure(2, "timeout");
        assert_eq!(failure.index(), 2);
        assert!(!failure.is_success());
    }
}

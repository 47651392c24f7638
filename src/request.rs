//! Request identity and payload types

use serde::{Deserialize, Serialize};

/// Position of a request within the overall run
///
/// Indices run from 0 to `total_requests - 1` and exist only to correlate
/// outcomes with their place in the run; they never alter payload content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTask {
    /// Index within the run
    pub index: usize,
}

impl RequestTask {
    /// Create a task for the given run index
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

/// Fixed JSON body sent with every request of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationPayload {
    /// Text to translate
    pub text: String,

    /// Target language code
    pub to_lang: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_json_format() {
        let payload = TranslationPayload {
            text: "hello".to_string(),
            to_lang: "wolof".to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();

        assert!(json.contains("\"text\":\"hello\""));
        assert!(json.contains("\"to_lang\":\"wolof\""));
    }

    #[test]
    fn test_task_index() {
        let task = RequestTask::new(7);
        assert_eq!(task.index, 7);
    }
}

//! Translation endpoint client

use async_trait::async_trait;
use reqwest::Client;

use super::RequestExecutor;
use crate::config::RunConfig;
use crate::error::Result;
use crate::outcome::RequestOutcome;
use crate::request::{RequestTask, TranslationPayload};

/// Client for the translation endpoint
///
/// Holds the shared `reqwest::Client` for the run; connections are pooled
/// by the underlying client and reused across every request of the run.
#[derive(Debug, Clone)]
pub struct TranslateClient {
    client: Client,
    url: String,
    token: String,
    payload: TranslationPayload,
}

impl TranslateClient {
    /// Build the shared HTTP client for a run
    ///
    /// # Errors
    /// Returns an error if the underlying client cannot be constructed.
    /// This is the only fatal failure at this layer and surfaces before any
    /// batch executes.
    pub fn new(config: &RunConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
            token: config.token.clone(),
            payload: TranslationPayload {
                text: config.text.clone(),
                to_lang: config.to_lang.clone(),
            },
        })
    }

    /// Target endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RequestExecutor for TranslateClient {
    async fn execute(&self, task: RequestTask) -> RequestOutcome {
        let response = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(&self.payload)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return RequestOutcome::failure(task.index, format!("request timed out: {e}"));
            }
            Err(e) => {
                return RequestOutcome::failure(task.index, format!("request failed: {e}"));
            }
        };

        let status = response.status().as_u16();

        // Any status code is a completed exchange; only an undecodable body
        // turns it into a failure.
        match response.json::<serde_json::Value>().await {
            Ok(body) => RequestOutcome::success(task.index, status, body),
            Err(e) if e.is_timeout() => {
                RequestOutcome::failure(task.index, format!("request timed out: {e}"))
            }
            Err(e) => RequestOutcome::failure(task.index, format!("invalid JSON response: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RunConfig {
        RunConfig::new("http://127.0.0.1:1/translate")
            .with_payload("hello", "wolof")
            .with_token("test-token")
    }

    #[test]
    fn test_client_creation() {
        let client = TranslateClient::new(&config()).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:1/translate");
    }

    #[tokio::test]
    async fn test_connection_error_is_failure() {
        // Port 1 on loopback is closed; the connection error must surface
        // as a failure value, not an Err.
        let client = TranslateClient::new(&config()).unwrap();
        let outcome = client.execute(RequestTask::new(4)).await;

        let RequestOutcome::Failure(failure) = outcome else {
            panic!("Expected Failure variant");
        };
        assert_eq!(failure.index, 4);
        assert!(failure.error.contains("request failed"));
    }
}

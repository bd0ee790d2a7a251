//! Answer service transport.
//!
//! The answer service maps a question string to an answer string over a
//! single JSON request/response pair:
//!
//! ```text
//! POST {endpoint}/ask   {"question": "..."}  ->  {"answer": "..."}
//! GET  {endpoint}/health                     ->  {"status": "..."}
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

/// Something that can answer a question.
///
/// The conversation only depends on this trait, so tests and the headless
/// driver can swap in scripted implementations.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Send `question` and return the answer text.
    async fn ask(&self, question: &str) -> Result<String, AskError>;
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// Response body of `/ask`. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// HTTP client for the answer service.
#[derive(Debug, Clone)]
pub struct HttpAnswerService {
    client: Client,
    endpoint: String,
}

impl HttpAnswerService {
    /// Create a client for `endpoint` (e.g. `http://localhost:8000`) with no
    /// request timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: normalize_endpoint(endpoint.into()),
        }
    }

    /// Create a client with an overall per-request timeout.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, AskError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AskError::Client)?;
        Ok(Self {
            client,
            endpoint: normalize_endpoint(endpoint.into()),
        })
    }

    /// Create a client from configuration.
    pub fn from_config(config: &Config) -> Result<Self, AskError> {
        match config.request_timeout_secs {
            Some(secs) => Self::with_timeout(&config.endpoint, Duration::from_secs(secs)),
            None => Ok(Self::new(&config.endpoint)),
        }
    }

    /// Base URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query `GET /health` and return the reported status.
    pub async fn health(&self) -> Result<String, AskError> {
        let url = format!("{}/health", self.endpoint);
        let response = self.client.get(&url).send().await.map_err(AskError::Transport)?;
        let body = read_success_body(response).await?;
        let health: HealthResponse =
            serde_json::from_slice(&body).map_err(AskError::MalformedResponse)?;
        Ok(health.status)
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, question: &str) -> Result<String, AskError> {
        let url = format!("{}/ask", self.endpoint);
        debug!(%url, question_len = question.len(), "posting question");

        let response = self
            .client
            .post(&url)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(AskError::Transport)?;

        let body = read_success_body(response).await?;
        let parsed: AskResponse =
            serde_json::from_slice(&body).map_err(AskError::MalformedResponse)?;
        Ok(parsed.answer)
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<Vec<u8>, AskError> {
    let status = response.status();
    if !status.is_success() {
        return Err(AskError::Status(status.as_u16()));
    }
    let bytes = response.bytes().await.map_err(AskError::Transport)?;
    Ok(bytes.to_vec())
}

fn normalize_endpoint(endpoint: String) -> String {
    endpoint.trim_end_matches('/').to_string()
}

/// Errors from the answer service.
///
/// The conversation collapses all of these into the fallback answer; the
/// variants exist for logging and for the one-shot CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// Connection, timeout or body read failure.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx HTTP status.
    #[error("answer service returned HTTP {0}")]
    Status(u16),

    /// Body did not match the expected schema.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request task ended without producing a result.
    #[error("request task failed: {0}")]
    Task(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trailing_slash_removed() {
        let service = HttpAnswerService::new("http://localhost:8000/");
        assert_eq!(service.endpoint(), "http://localhost:8000");
    }

    #[test]
    fn test_from_config_with_timeout() {
        let config = Config {
            request_timeout_secs: Some(5),
            ..Config::default()
        };
        let service = HttpAnswerService::from_config(&config).unwrap();
        assert_eq!(service.endpoint(), "http://localhost:8000");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(AskRequest { question: "foo\nbar" }).unwrap();
        assert_eq!(body, serde_json::json!({"question": "foo\nbar"}));
    }

    #[test]
    fn test_response_schema_check() {
        let ok: AskResponse =
            serde_json::from_str(r#"{"question": "q", "answer": "baz"}"#).unwrap();
        assert_eq!(ok.answer, "baz");

        assert!(serde_json::from_str::<AskResponse>(r#"{"reply": "baz"}"#).is_err());
        assert!(serde_json::from_str::<AskResponse>(r#"{"answer": 42}"#).is_err());
        assert!(serde_json::from_str::<AskResponse>("not json").is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AskError::Status(503).to_string(),
            "answer service returned HTTP 503"
        );
    }
}

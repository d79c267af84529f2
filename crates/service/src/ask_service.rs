use std::time::Duration;

use folio_core::{DEFAULT_TOP_K, RAG_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// Question forwarded to the RAG backend's `/ask` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    /// Forwarded as sent, `null` included. Only an absent field becomes the default.
    #[serde(default = "default_top_k")]
    pub top_k: serde_json::Value,
}

fn default_top_k() -> serde_json::Value {
    DEFAULT_TOP_K.into()
}

/// Proxy to the independently-run RAG backend.
pub struct AskService {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for AskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AskService")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl AskService {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(RAG_TIMEOUT_SECS))
    }

    #[must_use]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forwards the trimmed question and returns the backend's JSON verbatim.
    ///
    /// The whole exchange (connect, send, read body) is bounded by the
    /// configured timeout; on expiry the in-flight request is dropped.
    pub async fn ask(&self, request: &AskRequest) -> Result<serde_json::Value, ServiceError> {
        let question = request.question.trim();
        if question.is_empty() {
            return Err(ServiceError::InvalidInput("question must not be empty".to_owned()));
        }
        let body = AskRequest { question: question.to_owned(), top_k: request.top_k.clone() };

        match tokio::time::timeout(self.timeout, self.forward(&body)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    base_url = %self.base_url,
                    timeout_secs = self.timeout.as_secs(),
                    "RAG backend timed out, request aborted"
                );
                Err(ServiceError::Timeout {
                    secs: self.timeout.as_secs(),
                    base_url: self.base_url.clone(),
                })
            },
        }
    }

    async fn forward(&self, body: &AskRequest) -> Result<serde_json::Value, ServiceError> {
        let response = self
            .client
            .post(format!("{}/ask", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %text, "RAG backend error");
            return Err(ServiceError::Upstream {
                status: status.as_u16(),
                message: format!("RAG backend error: {} {text}", status.as_u16()),
            });
        }

        response.json::<serde_json::Value>().await.map_err(|e| {
            if e.is_decode() {
                ServiceError::Upstream {
                    status: 502,
                    message: format!("RAG backend returned invalid JSON: {e}"),
                }
            } else {
                self.transport_error(e)
            }
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> ServiceError {
        tracing::error!(base_url = %self.base_url, error = %err, "RAG backend request failed");
        if err.is_connect() {
            ServiceError::Unreachable { base_url: self.base_url.clone(), detail: err.to_string() }
        } else {
            ServiceError::RagRequest(err)
        }
    }
}

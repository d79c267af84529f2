//! Typed error enum for the service layer.
//!
//! Sorts LLM and RAG backend failures into the four categories callers
//! surface: validation, configuration, upstream failure, timeout. Storage
//! failures never get here; the services log them and carry on.

use folio_llm::LlmError;
use thiserror::Error;

/// Service-layer error returned to the HTTP and CLI front-ends.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller provided invalid input (empty name or question).
    #[error("{0}")]
    InvalidInput(String),

    /// Required backend (LLM API key) is not configured.
    #[error("{0}")]
    NotConfigured(String),

    /// An upstream API answered with a non-success status.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The completion API produced nothing usable.
    #[error("Could not generate the guide, please try again later")]
    GenerationFailed,

    /// The RAG backend did not answer within the wall-clock bound.
    #[error(
        "Request timed out after {secs} seconds. Possible causes:\n\
         1. The RAG backend is not running\n\
         2. The LLM took too long to generate an answer\n\
         3. Network connectivity problems\n\n\
         Check that the RAG backend is running and reachable at {base_url}"
    )]
    Timeout { secs: u64, base_url: String },

    /// The RAG backend refused or could not accept the connection.
    #[error(
        "Cannot connect to the RAG backend. Make sure that:\n\
         1. The RAG backend is running\n\
         2. It is listening on {base_url}\n\
         3. No firewall blocks the connection"
    )]
    Unreachable { base_url: String, detail: String },

    /// Any other transport failure talking to the RAG backend.
    #[error("RAG backend request failed: {0}")]
    RagRequest(#[source] reqwest::Error),
}

impl ServiceError {
    /// Maps a completion failure: upstream statuses are propagated, anything
    /// else collapses into the generic retryable [`ServiceError::GenerationFailed`].
    #[must_use]
    pub fn from_completion(err: LlmError) -> Self {
        match err {
            LlmError::HttpStatus { code, body } => {
                Self::Upstream { status: code, message: format!("DeepSeek API error: {body}") }
            },
            other => {
                tracing::error!(error = %other, "completion failed");
                Self::GenerationFailed
            },
        }
    }

    /// Raw error text for diagnostics that carry a separate `details` field.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        match self {
            Self::Timeout { secs, .. } => Some(format!("no response within {secs}s, request aborted")),
            Self::Unreachable { detail, .. } => Some(detail.clone()),
            Self::RagRequest(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

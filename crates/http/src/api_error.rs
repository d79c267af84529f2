//! Typed API error for HTTP handlers.
//!
//! Converts service errors into JSON responses with an `error` field and the
//! status code of their category: validation 400, configuration 500,
//! upstream failure with the upstream status, timeout/connection 500 with a
//! diagnostic.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_service::ServiceError;

const RAG_HINT: &str = "Start the RAG backend in a separate terminal, then retry";

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// Non-success answer from an upstream API, forwarded with its status.
    Upstream { status: StatusCode, message: String },
    /// 500 with a user-facing diagnostic plus raw details.
    Diagnostic { message: String, details: String },
    /// 500 with a message safe to show the caller.
    Failed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            },
            Self::Upstream { status, message } => (
                status,
                serde_json::json!({ "error": message, "status": status.as_u16() }),
            ),
            Self::Diagnostic { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": message, "details": details, "hint": RAG_HINT }),
            ),
            Self::Failed(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, serde_json::json!({ "error": msg }))
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::NotConfigured(msg) => Self::Failed(msg),
            ServiceError::Upstream { status, message } => Self::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            },
            ServiceError::GenerationFailed => Self::Failed(err.to_string()),
            ServiceError::Timeout { .. }
            | ServiceError::Unreachable { .. }
            | ServiceError::RagRequest(_) => Self::Diagnostic {
                details: err.details().unwrap_or_default(),
                message: err.to_string(),
            },
        }
    }
}

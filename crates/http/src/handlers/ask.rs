use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::AskBody;

/// Forwards the question to the RAG backend and relays its JSON answer unchanged.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(body) = payload?;
    let answer = state.ask_service.ask(&body).await?;
    Ok(Json(answer))
}

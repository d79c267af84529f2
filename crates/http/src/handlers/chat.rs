use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::ChatBody;
use crate::data_stream;

pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload?;
    let tokens = state.chat_service.stream_chat(&body.messages).await?;
    Ok(data_stream::into_response(tokens))
}

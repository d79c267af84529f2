use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use folio_core::GuideOutcome;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::GuideBody;

pub async fn guide(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GuideBody>, JsonRejection>,
) -> Result<Json<GuideOutcome>, ApiError> {
    let Json(body) = payload?;
    let outcome = state.guide_service.get_or_generate(&body.game_name).await?;
    Ok(Json(outcome))
}

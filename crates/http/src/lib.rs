//! HTTP API server for folio-guide.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod api_types;
mod data_stream;
mod handlers;

use axum::{
    Json, Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use folio_service::{AskService, ChatService, GuideService};

pub use api_types::{AskBody, ChatBody, GuideBody, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Services are immutable after startup; handlers never lock.
pub struct AppState {
    pub guide_service: Arc<GuideService>,
    pub chat_service: Arc<ChatService>,
    pub ask_service: Arc<AskService>,
}

pub fn create_router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/guide", post(handlers::guide::guide))
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/ask", post(handlers::ask::ask))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o.trim()) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(origin = %o, error = %e, "ignoring invalid CORS origin");
                None
            },
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

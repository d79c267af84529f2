use anyhow::Result;
use folio_http::{AppState, create_router};
use folio_service::{ChatService, GuideService, SearchLogger};
use folio_storage::StorageBackend;
use std::sync::Arc;

use crate::{get_cors_origins, get_database_url, get_llm_client};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let storage = Arc::new(StorageBackend::from_database_url(get_database_url().as_deref()).await?);
    tracing::info!(backend = storage.kind(), "storage ready");

    let llm = get_llm_client()?;
    let (search_logger, _search_log_worker) = SearchLogger::spawn(storage.clone());
    let ask_service = super::build_ask_service();
    tracing::info!(rag_backend = %ask_service.base_url(), "RAG proxy configured");

    let state = Arc::new(AppState {
        guide_service: Arc::new(GuideService::new(storage, llm.clone())),
        chat_service: Arc::new(ChatService::new(llm, search_logger)),
        ask_service: Arc::new(ask_service),
    });

    let router = create_router(state, &get_cors_origins());
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

use anyhow::Result;
use folio_service::GuideService;
use folio_storage::StorageBackend;
use std::sync::Arc;

use crate::{get_database_url, get_llm_client};

pub(crate) async fn run(name: &str) -> Result<()> {
    let storage = Arc::new(StorageBackend::from_database_url(get_database_url().as_deref()).await?);
    let service = GuideService::new(storage, get_llm_client()?);
    let outcome = service.get_or_generate(name).await?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

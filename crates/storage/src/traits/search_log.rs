use async_trait::async_trait;
use folio_core::SearchLogEntry;

use crate::error::StorageError;

/// Append-only search log.
#[async_trait]
pub trait SearchLogStore: Send + Sync {
    async fn insert_search_log(&self, entry: &SearchLogEntry) -> Result<(), StorageError>;
}

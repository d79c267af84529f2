use async_trait::async_trait;
use folio_core::SearchLogEntry;

use super::PgStorage;
use crate::error::StorageError;
use crate::traits::SearchLogStore;

#[async_trait]
impl SearchLogStore for PgStorage {
    async fn insert_search_log(&self, entry: &SearchLogEntry) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO search_logs (game_name, created_at) VALUES ($1, $2)")
            .bind(&entry.game_name)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

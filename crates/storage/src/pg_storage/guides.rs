use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{GuideRecord, GuideUpsert};
use sqlx::Row;

use super::PgStorage;
use crate::error::StorageError;
use crate::traits::GuideStore;

fn row_to_guide(row: &sqlx::postgres::PgRow) -> Result<GuideRecord, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(GuideRecord {
        id: row.try_get("id")?,
        game_name: row.try_get("game_name")?,
        content: row.try_get("content")?,
        created_at,
    })
}

#[async_trait]
impl GuideStore for PgStorage {
    async fn find_guide(&self, game_name: &str) -> Result<Option<GuideRecord>, StorageError> {
        let row = sqlx::query(
            "SELECT id, game_name, content, created_at FROM game_guides
             WHERE lower(game_name) = lower($1)
             LIMIT 1",
        )
        .bind(game_name.trim())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_guide).transpose()
    }

    async fn upsert_guide(&self, guide: &GuideUpsert) -> Result<GuideRecord, StorageError> {
        let row = sqlx::query(
            "INSERT INTO game_guides (game_name, content, created_at)
             VALUES ($1, $2, $3)
             ON CONFLICT ((lower(game_name))) DO UPDATE SET
               game_name = EXCLUDED.game_name,
               content = EXCLUDED.content,
               created_at = EXCLUDED.created_at
             RETURNING id, game_name, content, created_at",
        )
        .bind(guide.game_name.trim())
        .bind(&guide.content)
        .bind(guide.created_at)
        .fetch_one(&self.pool)
        .await?;
        row_to_guide(&row)
    }
}

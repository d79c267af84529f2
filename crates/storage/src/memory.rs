//! In-process storage used when no database is configured, and by tests.
//!
//! Contents live only as long as the process.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use folio_core::{GuideRecord, GuideUpsert, SearchLogEntry, guide_key};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{GuideStore, SearchLogStore};

#[derive(Debug, Default)]
pub struct InMemoryStorage {
    /// Keyed by `guide_key(game_name)`.
    guides: RwLock<HashMap<String, GuideRecord>>,
    search_logs: RwLock<Vec<SearchLogEntry>>,
    next_id: AtomicI64,
}

impl InMemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn guide_count(&self) -> usize {
        self.guides.read().await.len()
    }

    pub async fn search_logs(&self) -> Vec<SearchLogEntry> {
        self.search_logs.read().await.clone()
    }
}

#[async_trait]
impl GuideStore for InMemoryStorage {
    async fn find_guide(&self, game_name: &str) -> Result<Option<GuideRecord>, StorageError> {
        Ok(self.guides.read().await.get(&guide_key(game_name)).cloned())
    }

    async fn upsert_guide(&self, guide: &GuideUpsert) -> Result<GuideRecord, StorageError> {
        let mut guides = self.guides.write().await;
        let key = guide_key(&guide.game_name);
        let id = match guides.get(&key) {
            Some(existing) => existing.id,
            None => self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
        };
        let record = GuideRecord {
            id,
            game_name: guide.game_name.trim().to_owned(),
            content: guide.content.clone(),
            created_at: guide.created_at,
        };
        guides.insert(key, record.clone());
        Ok(record)
    }
}

#[async_trait]
impl SearchLogStore for InMemoryStorage {
    async fn insert_search_log(&self, entry: &SearchLogEntry) -> Result<(), StorageError> {
        self.search_logs.write().await.push(entry.clone());
        Ok(())
    }
}

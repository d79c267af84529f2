//! Test doubles shared by the service tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use folio_core::{GuideRecord, GuideUpsert, SearchLogEntry};
use folio_storage::{GuideStore, InMemoryStorage, SearchLogStore, StorageError};

/// Store whose every operation fails with a pool timeout.
#[derive(Debug, Default)]
pub(crate) struct FailingStore {
    attempts: AtomicUsize,
}

impl FailingStore {
    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn fail(&self) -> StorageError {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        StorageError::Database(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl GuideStore for FailingStore {
    async fn find_guide(&self, _game_name: &str) -> Result<Option<GuideRecord>, StorageError> {
        Err(self.fail())
    }

    async fn upsert_guide(&self, _guide: &GuideUpsert) -> Result<GuideRecord, StorageError> {
        Err(self.fail())
    }
}

#[async_trait]
impl SearchLogStore for FailingStore {
    async fn insert_search_log(&self, _entry: &SearchLogEntry) -> Result<(), StorageError> {
        Err(self.fail())
    }
}

/// In-memory store that counts upserts.
#[derive(Debug, Default)]
pub(crate) struct CountingStore {
    pub(crate) inner: InMemoryStorage,
    upserts: AtomicUsize,
    upserted_names: std::sync::Mutex<Vec<String>>,
}

impl CountingStore {
    pub(crate) fn upserts(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }

    pub(crate) fn upserted_names(&self) -> Vec<String> {
        self.upserted_names.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl GuideStore for CountingStore {
    async fn find_guide(&self, game_name: &str) -> Result<Option<GuideRecord>, StorageError> {
        self.inner.find_guide(game_name).await
    }

    async fn upsert_guide(&self, guide: &GuideUpsert) -> Result<GuideRecord, StorageError> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut names) = self.upserted_names.lock() {
            names.push(guide.game_name.clone());
        }
        self.inner.upsert_guide(guide).await
    }
}

//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use folio_core::{GuideRecord, GuideUpsert, SearchLogEntry};

use crate::error::StorageError;
use crate::traits::{GuideStore, SearchLogStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <crate::PgStorage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <crate::InMemoryStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Debug)]
pub enum StorageBackend {
    Postgres(crate::PgStorage),
    Memory(crate::InMemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(crate::InMemoryStorage::new())
    }

    /// Postgres when a URL is given, otherwise the in-memory store.
    pub async fn from_database_url(database_url: Option<&str>) -> Result<Self, StorageError> {
        match database_url {
            Some(url) => Self::new_postgres(url).await,
            None => {
                tracing::warn!("DATABASE_URL not set, guides and search logs are kept in memory");
                Ok(Self::new_memory())
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

// ── GuideStore ───────────────────────────────────────────────────

#[async_trait]
impl GuideStore for StorageBackend {
    async fn find_guide(&self, game_name: &str) -> Result<Option<GuideRecord>, StorageError> {
        dispatch!(self, GuideStore, find_guide(game_name))
    }

    async fn upsert_guide(&self, guide: &GuideUpsert) -> Result<GuideRecord, StorageError> {
        dispatch!(self, GuideStore, upsert_guide(guide))
    }
}

// ── SearchLogStore ───────────────────────────────────────────────

#[async_trait]
impl SearchLogStore for StorageBackend {
    async fn insert_search_log(&self, entry: &SearchLogEntry) -> Result<(), StorageError> {
        dispatch!(self, SearchLogStore, insert_search_log(entry))
    }
}

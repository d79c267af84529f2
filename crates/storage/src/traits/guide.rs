use async_trait::async_trait;
use folio_core::{GuideRecord, GuideUpsert};

use crate::error::StorageError;

/// Cached guide operations.
#[async_trait]
pub trait GuideStore: Send + Sync {
    /// Find the guide whose name matches `game_name` exactly, ignoring case.
    async fn find_guide(&self, game_name: &str) -> Result<Option<GuideRecord>, StorageError>;

    /// Insert a guide, or overwrite the row with the same lowercased name.
    async fn upsert_guide(&self, guide: &GuideUpsert) -> Result<GuideRecord, StorageError>;
}

//! Best-effort search logging on a background task.
//!
//! Callers hand names to a bounded queue and move on; a single worker drains
//! it into the store. Insert failures are logged and never reach the caller.

use std::sync::Arc;

use folio_core::{SEARCH_LOG_QUEUE_CAPACITY, SearchLogEntry};
use folio_storage::SearchLogStore;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

/// Sender side of the search-log queue. Cheap to clone.
#[derive(Clone, Debug)]
pub struct SearchLogger {
    tx: mpsc::Sender<SearchLogEntry>,
}

impl SearchLogger {
    /// Starts the worker. It exits once every `SearchLogger` clone is dropped
    /// and the queue is drained.
    #[must_use]
    pub fn spawn(store: Arc<dyn SearchLogStore>) -> (Self, JoinHandle<()>) {
        Self::spawn_with_capacity(store, SEARCH_LOG_QUEUE_CAPACITY)
    }

    #[must_use]
    pub fn spawn_with_capacity(
        store: Arc<dyn SearchLogStore>,
        capacity: usize,
    ) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::channel::<SearchLogEntry>(capacity.max(1));
        let handle = tokio::spawn(async move {
            while let Some(entry) = rx.recv().await {
                if let Err(e) = store.insert_search_log(&entry).await {
                    tracing::error!(game_name = %entry.game_name, error = %e, "failed to save search log");
                }
            }
            tracing::debug!("search log worker stopped");
        });
        (Self { tx }, handle)
    }

    /// Enqueues `game_name` without waiting. Never fails for the caller.
    pub fn log(&self, game_name: &str) {
        match self.tx.try_send(SearchLogEntry::now(game_name)) {
            Ok(()) => {},
            Err(TrySendError::Full(entry)) => {
                tracing::warn!(game_name = %entry.game_name, "search log queue full, entry dropped");
            },
            Err(TrySendError::Closed(entry)) => {
                tracing::warn!(game_name = %entry.game_name, "search log worker gone, entry dropped");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FailingStore;
    use folio_storage::InMemoryStorage;

    #[tokio::test]
    async fn entries_reach_the_store() {
        let store = Arc::new(InMemoryStorage::new());
        let (logger, worker) = SearchLogger::spawn(store.clone());

        logger.log("Hades");
        logger.log("Celeste");
        drop(logger);
        worker.await.unwrap();

        let names: Vec<String> = store.search_logs().await.into_iter().map(|e| e.game_name).collect();
        assert_eq!(names, vec!["Hades", "Celeste"]);
    }

    #[tokio::test]
    async fn insert_failures_are_swallowed() {
        let store = Arc::new(FailingStore::default());
        let (logger, worker) = SearchLogger::spawn(store.clone());

        logger.log("Hades");
        drop(logger);
        worker.await.expect("worker must not panic on insert failure");
        assert_eq!(store.attempts(), 1);
    }

    #[tokio::test]
    async fn log_after_worker_exit_does_not_panic() {
        let store = Arc::new(InMemoryStorage::new());
        let (logger, worker) = SearchLogger::spawn(store);
        worker.abort();
        let _ = worker.await;

        logger.log("Hades");
    }
}

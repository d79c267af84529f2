//! Storage layer for folio-guide
//!
//! Two tables are touched: `game_guides` (one cached guide per normalized
//! name) and `search_logs` (append-only). `PgStorage` talks to PostgreSQL via
//! sqlx; `InMemoryStorage` backs local runs without a database and tests.

pub mod backend;
pub mod error;
pub mod memory;
pub mod pg_migrations;
pub mod pg_storage;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::InMemoryStorage;
pub use pg_storage::PgStorage;
pub use traits::{GuideStore, SearchLogStore};

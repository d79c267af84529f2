//! Storage backend trait abstraction
//!
//! Async traits over the two tables, implemented by every backend so services
//! can hold `Arc<dyn GuideStore>` / `Arc<dyn SearchLogStore>`.

pub mod guide;
pub mod search_log;

pub use guide::GuideStore;
pub use search_log::SearchLogStore;

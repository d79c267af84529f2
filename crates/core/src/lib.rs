//! Core types and constants for folio-guide
//!
//! Domain types shared across the storage, LLM, service, and HTTP crates.

mod chat;
pub mod constants;
mod env_config;
mod guide;
mod search_log;

pub use chat::*;
pub use constants::*;
pub use env_config::env_parse_with_default;
pub use guide::*;
pub use search_log::*;

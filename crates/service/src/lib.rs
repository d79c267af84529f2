//! Service layer for folio-guide
//!
//! Centralizes the request flows between HTTP/CLI front-ends and
//! storage/llm/RAG backends.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod ask_service;
mod chat_service;
mod error;
mod guide_service;
mod search_logger;

#[cfg(test)]
mod test_support;

pub use ask_service::{AskRequest, AskService};
pub use chat_service::ChatService;
pub use error::ServiceError;
pub use guide_service::GuideService;
pub use search_logger::SearchLogger;

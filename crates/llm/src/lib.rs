//! LLM client for guide generation and streamed guide chat.
//!
//! Speaks the OpenAI-compatible `/v1/chat/completions` protocol (DeepSeek by
//! default), both as a single JSON response and as an SSE token stream.

mod ai_types;
mod chat;
mod client;
pub mod error;
mod guide;
pub mod prompts;
mod stream;

#[cfg(test)]
mod tests;

pub use ai_types::ChatRequest;
pub use client::{LlmClient, truncate};
pub use error::LlmError;
pub use stream::{SseDecoder, TokenStream};

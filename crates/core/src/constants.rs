//! Shared constants for folio-guide.
//!
//! Centralizes defaults that the storage, LLM, service, and HTTP crates agree on.

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default base URL of the OpenAI-compatible completion API.
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.deepseek.com";

/// Default completion model.
pub const DEFAULT_LLM_MODEL: &str = "deepseek-chat";

/// HTTP client timeout for completion calls, in seconds.
pub const LLM_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Longest SSE line buffered while waiting for its newline.
pub const SSE_MAX_LINE_BYTES: usize = 1024 * 1024;

/// Sampling temperature used for guide generation.
pub const GUIDE_TEMPERATURE: f32 = 0.7;

/// Token cap for a generated guide.
pub const GUIDE_MAX_TOKENS: u32 = 2000;

/// Default base URL of the external RAG backend.
pub const DEFAULT_RAG_BACKEND_URL: &str = "http://localhost:8000";

/// Wall-clock bound for a single RAG backend call, in seconds.
pub const RAG_TIMEOUT_SECS: u64 = 60;

/// Number of passages requested from the RAG backend when the caller omits `top_k`.
pub const DEFAULT_TOP_K: u32 = 3;

/// Capacity of the search-log queue. Names beyond this are dropped with a warning.
pub const SEARCH_LOG_QUEUE_CAPACITY: usize = 256;

/// Origins allowed by CORS when `FOLIO_CORS_ORIGINS` is not set.
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Error message when the completion API key is missing.
pub const LLM_NOT_CONFIGURED: &str = "DeepSeek API key is not configured";

pub(crate) mod ask;
pub(crate) mod guide;
pub(crate) mod migrate;
pub(crate) mod serve;

use std::time::Duration;

use folio_core::{RAG_TIMEOUT_SECS, env_parse_with_default};
use folio_service::AskService;

pub(crate) fn build_ask_service() -> AskService {
    let timeout_secs = env_parse_with_default("RAG_TIMEOUT_SECS", RAG_TIMEOUT_SECS);
    AskService::with_timeout(&crate::get_rag_base_url(), Duration::from_secs(timeout_secs))
}

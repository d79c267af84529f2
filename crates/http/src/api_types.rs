use folio_core::ChatMessage;
use serde::{Deserialize, Serialize};

pub use folio_service::AskRequest as AskBody;

/// Body of `POST /api/guide`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideBody {
    #[serde(default)]
    pub game_name: String,
}

/// Body of `POST /api/chat`. Extra per-message fields sent by chat UIs are ignored.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

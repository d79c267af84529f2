use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only record of a name searched through the chat flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchLogEntry {
    pub game_name: String,
    pub created_at: DateTime<Utc>,
}

impl SearchLogEntry {
    #[must_use]
    pub fn now(game_name: impl Into<String>) -> Self {
        Self { game_name: game_name.into(), created_at: Utc::now() }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cached game guide, one row per normalized game name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuideRecord {
    pub id: i64,
    /// Name as first submitted (trimmed). Lookups ignore case.
    pub game_name: String,
    /// Markdown body produced by the completion API.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Guide to be written with insert-or-overwrite semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideUpsert {
    pub game_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a guide request, as returned to HTTP and CLI callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuideOutcome {
    pub content: String,
    /// `true` when served from the store without calling the completion API.
    pub cached: bool,
    pub game_name: String,
    pub created_at: DateTime<Utc>,
}

impl GuideOutcome {
    #[must_use]
    pub fn from_cache(record: GuideRecord) -> Self {
        Self {
            content: record.content,
            cached: true,
            game_name: record.game_name,
            created_at: record.created_at,
        }
    }
}

/// Trims a user-supplied name. Returns `None` when nothing is left.
#[must_use]
pub fn normalize_game_name(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Uniqueness key for a game name: trimmed and lowercased.
#[must_use]
pub fn guide_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(normalize_game_name("  Hollow Knight \n"), Some("Hollow Knight"));
    }

    #[test]
    fn normalize_rejects_blank() {
        assert_eq!(normalize_game_name(""), None);
        assert_eq!(normalize_game_name(" \t\n "), None);
    }

    #[test]
    fn guide_key_ignores_case_and_padding() {
        assert_eq!(guide_key(" Elden Ring "), guide_key("ELDEN RING"));
    }

    #[test]
    fn outcome_serializes_camel_case() {
        let outcome = GuideOutcome::from_cache(GuideRecord {
            id: 1,
            game_name: "Celeste".to_owned(),
            content: "## Overview".to_owned(),
            created_at: Utc::now(),
        });
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["cached"], true);
        assert_eq!(value["gameName"], "Celeste");
        assert!(value.get("createdAt").is_some());
    }
}

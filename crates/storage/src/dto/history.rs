use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// One ledger entry as returned by the history endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntryResponse {
    pub id: i64,
    pub player_name: String,
    pub action: String,
    pub points: i64,
    pub timestamp: String,
    pub new_total: i64,
    pub teacher_name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct HistoryQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

impl HistoryQuery {
    /// Requested limit clamped to a sane window.
    pub fn effective_limit(&self) -> i64 {
        self.limit.clamp(1, 500)
    }
}

impl From<crate::models::HistoryEntry> for HistoryEntryResponse {
    fn from(entry: crate::models::HistoryEntry) -> Self {
        Self {
            id: entry.id,
            player_name: entry.player_name,
            action: entry.action,
            points: entry.points,
            timestamp: entry.timestamp,
            new_total: entry.new_total,
            teacher_name: entry.teacher_name,
            created_at: entry.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_defaults_to_100() {
        let query: HistoryQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.effective_limit(), 100);
    }

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(HistoryQuery { limit: 0 }.effective_limit(), 1);
        assert_eq!(HistoryQuery { limit: -5 }.effective_limit(), 1);
        assert_eq!(HistoryQuery { limit: 10_000 }.effective_limit(), 500);
    }
}

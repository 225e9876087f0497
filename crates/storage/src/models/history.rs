use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One point-change event in a player's ledger.
///
/// `timestamp` is the human-readable wall-clock time captured when the points
/// were applied; `created_at` is the row-creation time used for recency
/// ordering. `new_total` is the player's score immediately after this entry
/// was applied and is never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HistoryEntry {
    pub id: i64,
    pub player_name: String,
    pub action: String,
    pub points: i64,
    pub timestamp: String,
    pub new_total: i64,
    pub teacher_name: String,
    pub created_at: chrono::NaiveDateTime,
}

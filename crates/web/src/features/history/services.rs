use sqlx::SqlitePool;
use storage::{error::Result, models::HistoryEntry, repository::history::HistoryRepository};

/// Most recent point changes for a player, newest first
pub async fn get_history(
    pool: &SqlitePool,
    player_name: &str,
    limit: i64,
) -> Result<Vec<HistoryEntry>> {
    let repo = HistoryRepository::new(pool);
    repo.recent_for(player_name, limit).await
}

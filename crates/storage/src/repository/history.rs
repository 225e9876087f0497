use sqlx::{SqliteConnection, SqlitePool};

use crate::error::{Result, StorageError};
use crate::models::HistoryEntry;

pub struct HistoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> HistoryRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a ledger entry within the caller's transaction.
    ///
    /// `new_total` is the post-mutation score supplied by the caller; the
    /// ledger never recomputes it.
    pub async fn append(
        conn: &mut SqliteConnection,
        player_name: &str,
        action: &str,
        points: i64,
        teacher_name: &str,
        timestamp: &str,
        new_total: i64,
    ) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO history (player_name, action, points, timestamp, new_total, teacher_name)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id
            "#,
        )
        .bind(player_name)
        .bind(action)
        .bind(points)
        .bind(timestamp)
        .bind(new_total)
        .bind(teacher_name)
        .fetch_one(conn)
        .await?;

        Ok(id)
    }

    /// Most recent entries for a player, newest first. The row id breaks
    /// same-second ties in `created_at`.
    pub async fn recent_for(&self, player_name: &str, limit: i64) -> Result<Vec<HistoryEntry>> {
        let entries = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT id, player_name, action, points, timestamp, new_total, teacher_name, created_at
            FROM history
            WHERE player_name = ?1
            ORDER BY created_at DESC, id DESC
            LIMIT ?2
            "#,
        )
        .bind(player_name)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// The single latest entry for a player, if any
    pub async fn most_recent_for(&self, player_name: &str) -> Result<Option<HistoryEntry>> {
        let entry = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT id, player_name, action, points, timestamp, new_total, teacher_name, created_at
            FROM history
            WHERE player_name = ?1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(player_name)
        .fetch_optional(self.pool)
        .await?;

        Ok(entry)
    }

    /// Remove a single entry by id
    pub async fn remove(&self, entry_id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM history WHERE id = ?1")
            .bind(entry_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Number of entries recorded for a player
    pub async fn count_for(&self, player_name: &str) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM history WHERE player_name = ?1")
                .bind(player_name)
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }
}

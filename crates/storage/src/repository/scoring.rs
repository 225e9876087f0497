use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::repository::history::HistoryRepository;

/// Attribution recorded when no teacher name is supplied
pub const ANONYMOUS_TEACHER: &str = "Anonyme";

/// Wall-clock format stored in `history.timestamp`
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Applies point deltas and undoes the latest one, each as a single SQLite
/// transaction over the player row and its ledger.
///
/// Both operations open with a write statement, so concurrent callers queue on
/// SQLite's single-writer lock instead of interleaving and breaking the
/// score-equals-latest-total invariant.
pub struct ScoringRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ScoringRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Apply a signed point delta to a player and record the resulting total.
    ///
    /// The score update is conditional: zero affected rows means the player
    /// does not exist and the transaction rolls back before any ledger entry
    /// is written. There is no read-then-write window.
    pub async fn apply_points(
        &self,
        player_name: &str,
        points: i64,
        action: &str,
        teacher_name: Option<&str>,
    ) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        let affected = sqlx::query("UPDATE players SET score = score + ?1 WHERE name = ?2")
            .bind(points)
            .bind(player_name)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(StorageError::NotFound);
        }

        let new_total = sqlx::query_scalar::<_, i64>("SELECT score FROM players WHERE name = ?1")
            .bind(player_name)
            .fetch_one(&mut *tx)
            .await?;

        let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        HistoryRepository::append(
            &mut *tx,
            player_name,
            action,
            points,
            teacher_name.unwrap_or(ANONYMOUS_TEACHER),
            &timestamp,
            new_total,
        )
        .await?;

        tx.commit().await?;

        Ok(new_total)
    }

    /// Undo the single latest ledger entry for a player.
    ///
    /// The entry is removed and the score rolled back by its delta; the undone
    /// action disappears from the ledger entirely. Repeated calls peel one
    /// entry at a time. Returns the resulting score, 0 if the player row is
    /// gone.
    pub async fn undo_last(&self, player_name: &str) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        // Fetch-and-delete in one write statement: the newest entry for the
        // player, same-second ties broken by id.
        let removed = sqlx::query_scalar::<_, i64>(
            r#"
            DELETE FROM history
            WHERE id = (
                SELECT id FROM history
                WHERE player_name = ?1
                ORDER BY created_at DESC, id DESC
                LIMIT 1
            )
            RETURNING points
            "#,
        )
        .bind(player_name)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(points) = removed else {
            return Err(StorageError::NothingToUndo);
        };

        sqlx::query("UPDATE players SET score = score - ?1 WHERE name = ?2")
            .bind(points)
            .bind(player_name)
            .execute(&mut *tx)
            .await?;

        let score = sqlx::query_scalar::<_, i64>("SELECT score FROM players WHERE name = ?1")
            .bind(player_name)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(score.unwrap_or(0))
    }
}

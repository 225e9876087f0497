use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::models::Player;

pub struct PlayerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all players, best score first. Ties keep insertion order.
    pub async fn list(&self) -> Result<Vec<Player>> {
        let players = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, name, franchise, score, created_at
            FROM players
            ORDER BY score DESC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(players)
    }

    /// Find a player by name
    pub async fn find_by_name(&self, name: &str) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, name, franchise, score, created_at
            FROM players
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(player)
    }

    /// Create a new player with a zero score
    pub async fn create(&self, name: &str, franchise: &str) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO players (name, franchise, score)
            VALUES (?1, ?2, 0)
            RETURNING id, name, franchise, score, created_at
            "#,
        )
        .bind(name)
        .bind(franchise)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::DuplicateName(name.to_string())
            } else {
                err
            }
        })?;

        Ok(player)
    }

    /// Delete a player and every ledger entry that references it.
    ///
    /// The history rows go first, in the same transaction, so a failure
    /// between the two deletes can never leave orphaned ledger rows.
    pub async fn delete(&self, name: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM history WHERE player_name = ?1")
            .bind(name)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM players WHERE name = ?1")
            .bind(name)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

use sqlx::SqlitePool;

use crate::error::Result;

/// Fixed franchise rosters inserted on first startup.
pub const FRANCHISE_ROSTER: &[(&str, &[&str])] = &[
    (
        "Minotaurs",
        &["Leny", "Lyam", "Augustin", "Lino", "Lina D", "Djilane", "Talia"],
    ),
    (
        "Krakens",
        &["Swan", "Nolann", "Enery", "Marie", "Seyma Nur", "Willow"],
    ),
    (
        "Phoenix",
        &["Mahé", "Narcisse", "Daniella", "Matis.B", "Jamila"],
    ),
    (
        "Werewolves",
        &["Assia", "Ethaniel", "Russy", "Youssef", "Lisa L", "Noa", "Lenny K"],
    ),
];

/// One-time roster bootstrap, guarded by an emptiness check.
///
/// Runs only when the `players` table is empty; an existing roster is never
/// reconciled against the seed list, even if the list changes later. Returns
/// whether anything was inserted.
pub async fn seed_initial_roster(pool: &SqlitePool) -> Result<bool> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM players")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    for &(franchise, students) in FRANCHISE_ROSTER {
        for &name in students {
            sqlx::query("INSERT INTO players (name, franchise, score) VALUES (?1, ?2, 0)")
                .bind(name)
                .bind(franchise)
                .execute(&mut *tx)
                .await?;
        }
    }
    tx.commit().await?;

    Ok(true)
}

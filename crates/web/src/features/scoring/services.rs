use sqlx::SqlitePool;
use storage::{
    dto::scoring::ApplyPointsRequest, error::Result, repository::scoring::ScoringRepository,
};

/// Apply a point delta to a player, returning the new score
pub async fn apply_points(
    pool: &SqlitePool,
    player_name: &str,
    request: &ApplyPointsRequest,
) -> Result<i64> {
    let repo = ScoringRepository::new(pool);
    repo.apply_points(
        player_name,
        request.points,
        &request.action,
        request.teacher_name.as_deref(),
    )
    .await
}

/// Undo the latest point change for a player, returning the new score
pub async fn undo_last(pool: &SqlitePool, player_name: &str) -> Result<i64> {
    let repo = ScoringRepository::new(pool);
    repo.undo_last(player_name).await
}

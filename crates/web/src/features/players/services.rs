use sqlx::SqlitePool;
use storage::{
    dto::player::AddStudentRequest, error::Result, models::Player,
    repository::player::PlayerRepository,
};

/// List all players, ranked by score
pub async fn list_players(pool: &SqlitePool) -> Result<Vec<Player>> {
    let repo = PlayerRepository::new(pool);
    repo.list().await
}

/// Get a player by name
pub async fn get_player(pool: &SqlitePool, name: &str) -> Result<Player> {
    let repo = PlayerRepository::new(pool);
    repo.find_by_name(name).await
}

/// Add a student to the roster with a zero score
pub async fn add_student(pool: &SqlitePool, request: &AddStudentRequest) -> Result<Player> {
    let repo = PlayerRepository::new(pool);
    repo.create(&request.name, &request.franchise).await
}

/// Remove a student and every ledger entry referencing them
pub async fn remove_student(pool: &SqlitePool, name: &str) -> Result<()> {
    let repo = PlayerRepository::new(pool);
    repo.delete(name).await
}

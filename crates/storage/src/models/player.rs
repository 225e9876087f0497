use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub franchise: String,
    pub score: i64,
    pub created_at: chrono::NaiveDateTime,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Response containing a player's roster entry and running score
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponse {
    pub name: String,
    pub franchise: String,
    pub score: i64,
    pub created_at: NaiveDateTime,
}

/// Request payload for adding a student to the roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddStudentRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Franchise must be between 1 and 255 characters"
    ))]
    pub franchise: String,
}

impl From<crate::models::Player> for PlayerResponse {
    fn from(player: crate::models::Player) -> Self {
        Self {
            name: player.name,
            franchise: player.franchise,
            score: player.score,
            created_at: player.created_at,
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for applying a point delta to a player.
///
/// `points` is a signed delta and may be zero; no bound is enforced on the
/// resulting score. `teacher_name` falls back to the anonymous attribution
/// when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ApplyPointsRequest {
    pub points: i64,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Action must be between 1 and 255 characters"
    ))]
    pub action: String,

    #[validate(length(max = 255))]
    pub teacher_name: Option<String>,
}

/// Score returned after a point application or undo
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    pub new_score: i64,
}

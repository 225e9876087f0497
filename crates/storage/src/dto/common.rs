use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness probe payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

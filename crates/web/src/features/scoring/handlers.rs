use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::scoring::{ApplyPointsRequest, ScoreResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/players/{name}/points",
    params(
        ("name" = String, Path, description = "Player name")
    ),
    request_body = ApplyPointsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Points applied, new score returned", body = ScoreResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player not found")
    ),
    tag = "scoring"
)]
pub async fn apply_points(
    State(db): State<Database>,
    Path(name): Path<String>,
    Json(req): Json<ApplyPointsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let new_score = services::apply_points(db.pool(), &name, &req).await?;

    Ok(Json(ScoreResponse { new_score }).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/players/{name}/points/last",
    params(
        ("name" = String, Path, description = "Player name")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Latest point change undone, new score returned", body = ScoreResponse),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "No history entry to undo")
    ),
    tag = "scoring"
)]
pub async fn undo_last(
    State(db): State<Database>,
    Path(name): Path<String>,
) -> Result<Response, WebError> {
    let new_score = services::undo_last(db.pool(), &name).await?;

    Ok(Json(ScoreResponse { new_score }).into_response())
}

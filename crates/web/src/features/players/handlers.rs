use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::player::{AddStudentRequest, PlayerResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/players",
    responses(
        (status = 200, description = "All players ranked by score, best first", body = Vec<PlayerResponse>)
    ),
    tag = "players"
)]
pub async fn list_players(State(db): State<Database>) -> Result<Response, WebError> {
    let players = services::list_players(db.pool()).await?;

    let response: Vec<PlayerResponse> = players.into_iter().map(PlayerResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{name}",
    params(
        ("name" = String, Path, description = "Player name")
    ),
    responses(
        (status = 200, description = "Player found", body = PlayerResponse),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn get_player(
    State(db): State<Database>,
    Path(name): Path<String>,
) -> Result<Response, WebError> {
    let player = services::get_player(db.pool(), &name).await?;

    Ok(Json(PlayerResponse::from(player)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/players",
    request_body = AddStudentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Student added with a zero score", body = PlayerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "A player with this name already exists")
    ),
    tag = "players"
)]
pub async fn add_student(
    State(db): State<Database>,
    Json(req): Json<AddStudentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let player = services::add_student(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(player))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/players/{name}",
    params(
        ("name" = String, Path, description = "Player name")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Student and their history removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn remove_student(
    State(db): State<Database>,
    Path(name): Path<String>,
) -> Result<Response, WebError> {
    services::remove_student(db.pool(), &name).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

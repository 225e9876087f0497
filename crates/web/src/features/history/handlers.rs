use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::history::{HistoryEntryResponse, HistoryQuery},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/players/{name}/history",
    params(
        ("name" = String, Path, description = "Player name"),
        HistoryQuery
    ),
    responses(
        (status = 200, description = "Most recent point changes, newest first", body = Vec<HistoryEntryResponse>)
    ),
    tag = "history"
)]
pub async fn get_history(
    State(db): State<Database>,
    Path(name): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Response, WebError> {
    let entries = services::get_history(db.pool(), &name, query.effective_limit()).await?;

    let response: Vec<HistoryEntryResponse> = entries
        .into_iter()
        .map(HistoryEntryResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

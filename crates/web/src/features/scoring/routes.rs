use axum::{
    Router, middleware,
    routing::{delete, post},
};
use storage::Database;

use super::handlers::{apply_points, undo_last};
use crate::middleware::auth::{TeacherKeys, require_auth};

pub fn routes(teacher_keys: TeacherKeys) -> Router<Database> {
    Router::new()
        .route("/:name/points", post(apply_points))
        .route("/:name/points/last", delete(undo_last))
        .route_layer(middleware::from_fn_with_state(teacher_keys, require_auth))
}

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{add_student, get_player, list_players, remove_student};
use crate::middleware::auth::{TeacherKeys, require_auth};

pub fn routes(teacher_keys: TeacherKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(add_student))
        .route("/:name", delete(remove_student))
        .route_layer(middleware::from_fn_with_state(teacher_keys, require_auth));

    Router::new()
        .route("/", get(list_players))
        .route("/:name", get(get_player))
        .merge(protected)
}

use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_history;

pub fn routes() -> Router<Database> {
    Router::new().route("/:name/history", get(get_history))
}

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;

use crate::error::WebError;

/// Capability keys that gate the teacher-only (mutating) routes.
#[derive(Clone)]
pub struct TeacherKeys {
    keys: HashSet<String>,
}

impl TeacherKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { keys }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

pub async fn require_auth(
    State(keys): State<TeacherKeys>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match token {
        Some(token) if keys.is_valid(token) => Ok(next.run(req).await),
        _ => {
            tracing::warn!("Invalid teacher key attempt");
            Err(WebError::Unauthorized)
        }
    }
}

use axum::{Json, Router, routing::get};
use storage::{Database, dto::common::HealthResponse};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features;
use crate::middleware::auth::TeacherKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        crate::features::players::handlers::list_players,
        crate::features::players::handlers::get_player,
        crate::features::players::handlers::add_student,
        crate::features::players::handlers::remove_student,
        crate::features::scoring::handlers::apply_points,
        crate::features::scoring::handlers::undo_last,
        crate::features::history::handlers::get_history,
    ),
    components(
        schemas(
            storage::dto::player::PlayerResponse,
            storage::dto::player::AddStudentRequest,
            storage::dto::scoring::ApplyPointsRequest,
            storage::dto::scoring::ScoreResponse,
            storage::dto::history::HistoryEntryResponse,
            storage::dto::common::HealthResponse,
            storage::models::Player,
            storage::models::HistoryEntry,
        )
    ),
    tags(
        (name = "players", description = "Roster and ranking endpoints"),
        (name = "scoring", description = "Point award and undo endpoints"),
        (name = "history", description = "Point-change ledger endpoints"),
        (name = "health", description = "Liveness probe"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Teacher key")
                        .build(),
                ),
            )
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Assemble the full application router.
pub fn app(db: Database, teacher_keys: TeacherKeys) -> Router {
    let players_api = features::players::routes(teacher_keys.clone())
        .merge(features::scoring::routes(teacher_keys))
        .merge(features::history::routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/players", players_api)
        .layer(cors)
        .with_state(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const TEST_KEY: &str = "test-key";

    async fn test_app() -> Router {
        let db = Database::in_memory().await.expect("in-memory database");
        db.run_migrations().await.expect("migrations");
        app(db, TeacherKeys::from_comma_separated(TEST_KEY))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn authed(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", TEST_KEY))
            .header(header::CONTENT_TYPE, "application/json");

        match body {
            Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn add_student(app: &Router, name: &str, franchise: &str) {
        let response = app
            .clone()
            .oneshot(authed(
                "POST",
                "/api/players",
                Some(json!({ "name": name, "franchise": franchise })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = test_app().await;

        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_roster_starts_empty() {
        let app = test_app().await;

        let response = app.oneshot(get("/api/players")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_mutating_routes_require_teacher_key() {
        let app = test_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/api/players")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "name": "NewKid", "franchise": "Krakens" }).to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_add_get_and_rank_students() {
        let app = test_app().await;

        add_student(&app, "NewKid", "Krakens").await;
        add_student(&app, "Leny", "Minotaurs").await;

        let response = app.clone().oneshot(get("/api/players/NewKid")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], "NewKid");
        assert_eq!(body["franchise"], "Krakens");
        assert_eq!(body["score"], 0);

        let response = app.oneshot(get("/api/players")).await.unwrap();
        let body = body_json(response).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["NewKid", "Leny"]);
    }

    #[tokio::test]
    async fn test_duplicate_student_is_a_conflict() {
        let app = test_app().await;

        add_student(&app, "NewKid", "Krakens").await;

        let response = app
            .clone()
            .oneshot(authed(
                "POST",
                "/api/players",
                Some(json!({ "name": "NewKid", "franchise": "Krakens" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = app.oneshot(get("/api/players")).await.unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected() {
        let app = test_app().await;

        let response = app
            .oneshot(authed(
                "POST",
                "/api/players",
                Some(json!({ "name": "", "franchise": "Krakens" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_apply_points_and_read_history() {
        let app = test_app().await;
        add_student(&app, "Leny", "Minotaurs").await;

        let response = app
            .clone()
            .oneshot(authed(
                "POST",
                "/api/players/Leny/points",
                Some(json!({
                    "points": 5,
                    "action": "Appr-pos +5",
                    "teacher_name": "M.Durand"
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["new_score"], 5);

        let response = app
            .oneshot(get("/api/players/Leny/history?limit=10"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["points"], 5);
        assert_eq!(entries[0]["new_total"], 5);
        assert_eq!(entries[0]["teacher_name"], "M.Durand");
    }

    #[tokio::test]
    async fn test_apply_points_to_unknown_player_is_not_found() {
        let app = test_app().await;

        let response = app
            .oneshot(authed(
                "POST",
                "/api/players/Nobody/points",
                Some(json!({ "points": 5, "action": "Bonus" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_undo_round_trip() {
        let app = test_app().await;
        add_student(&app, "Leny", "Minotaurs").await;

        for (points, action) in [(5, "Appr-pos +5"), (-3, "Malus -3")] {
            let response = app
                .clone()
                .oneshot(authed(
                    "POST",
                    "/api/players/Leny/points",
                    Some(json!({ "points": points, "action": action })),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .clone()
            .oneshot(authed("DELETE", "/api/players/Leny/points/last", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["new_score"], 5);

        let response = app
            .oneshot(get("/api/players/Leny/history"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_undo_with_no_history_is_a_conflict() {
        let app = test_app().await;
        add_student(&app, "Leny", "Minotaurs").await;

        let response = app
            .oneshot(authed("DELETE", "/api/players/Leny/points/last", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_remove_student_cascades_history() {
        let app = test_app().await;
        add_student(&app, "Leny", "Minotaurs").await;

        let response = app
            .clone()
            .oneshot(authed(
                "POST",
                "/api/players/Leny/points",
                Some(json!({ "points": 5, "action": "Bonus" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(authed("DELETE", "/api/players/Leny", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.clone().oneshot(get("/api/players/Leny")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(get("/api/players/Leny/history"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }
}

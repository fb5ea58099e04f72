#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pupil_api::config::ServerConfig;
use pupil_api::router::build_app_router;
use pupil_api::state::AppState;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Build a test `ServerConfig` from the built-in defaults.
///
/// Defaults allow `http://localhost:3000` as CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::from_lookup(|_| None).expect("defaults must parse");
    config.host = "127.0.0.1".to_string();
    config.port = 0;
    config
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(&body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(&body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn session_body(session_id: &str) -> Value {
    json!({
        "session_id": session_id,
        "participant_id": "P-001",
        "start_time": 1_700_000_000_000_i64,
    })
}

pub fn trial_response_body(session_id: &str, trial_id: i32, timestamp: i64) -> Value {
    json!({
        "session_id": session_id,
        "participant_id": "P-001",
        "trial_id": trial_id,
        "question_number": trial_id,
        "selected_option": "A",
        "stimulus_start_time": timestamp - 4000,
        "answer_time": timestamp - 1500,
        "next_clicked_time": timestamp - 1000,
        "cross_start_time": timestamp - 6000,
        "cross_end_time": timestamp - 4000,
        "response_time": 2500,
        "timestamp": timestamp,
    })
}

pub fn event_log_body(session_id: &str, event_type: &str, timestamp: i64) -> Value {
    json!({
        "session_id": session_id,
        "event_type": event_type,
        "event_data": {"screen": "instructions"},
        "timestamp": timestamp,
    })
}

/// Create a session through the API and return its JSON representation.
pub async fn create_session(pool: &PgPool, session_id: &str) -> Value {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/sessions",
        session_body(session_id),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}

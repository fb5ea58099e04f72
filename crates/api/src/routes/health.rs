use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET / -- confirms the process is serving requests.
async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Pupil Study API is running",
    })
}

/// GET /health -- liveness only; never touches the database.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "API is healthy",
    })
}

/// Mount liveness routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

pub mod health;
pub mod session;
pub mod trial;

use axum::routing::post;
use axum::Router;

use crate::handlers::{event_log, eye_tracking, survey, trial_response};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /sessions                          create (POST)
/// /sessions/{session_id}             get, update, delete
/// /sessions/{session_id}/responses   session with trial responses and events
///
/// /trial-responses                   record (POST)
/// /feedback-responses                record (POST)
/// /sam-responses                     record (POST)
/// /tlx-responses                     record (POST)
/// /event-logs                        record (POST)
/// /eye-tracking                      record (POST)
///
/// /trials                            list, create
/// /trials/{trial_id}                 get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sessions", session::router())
        // Per-session records. Each rejects unknown session ids with 404.
        .route("/trial-responses", post(trial_response::create))
        .route("/feedback-responses", post(survey::create_feedback))
        .route("/sam-responses", post(survey::create_sam))
        .route("/tlx-responses", post(survey::create_tlx))
        .route("/event-logs", post(event_log::create))
        .route("/eye-tracking", post(eye_tracking::create))
        // Stimulus catalog.
        .nest("/trials", trial::router())
}

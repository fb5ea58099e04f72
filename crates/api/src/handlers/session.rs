//! Handlers for the `/sessions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pupil_core::error::CoreError;
use pupil_db::models::session::{CreateSession, SessionResponses, StudySession, UpdateSession};
use pupil_db::repositories::SessionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::path_param::PathParam;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// POST /api/sessions
///
/// Idempotent on `session_id`: a repeat call returns the stored row untouched.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSession>,
) -> AppResult<Json<StudySession>> {
    let (session, inserted) = SessionRepo::create_or_get(&state.pool, &input).await?;
    if inserted {
        tracing::info!(
            session_id = %session.session_id,
            participant_id = %session.participant_id,
            "Session created"
        );
    }
    Ok(Json(session))
}

/// GET /api/sessions/{session_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(session_id): PathParam<String>,
) -> AppResult<Json<StudySession>> {
    let session = SessionRepo::find_by_session_id(&state.pool, &session_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::session_not_found(&session_id)))?;
    Ok(Json(session))
}

/// PUT /api/sessions/{session_id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(session_id): PathParam<String>,
    ValidatedJson(input): ValidatedJson<UpdateSession>,
) -> AppResult<Json<StudySession>> {
    let session = SessionRepo::update(&state.pool, &session_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::session_not_found(&session_id)))?;
    tracing::info!(
        session_id = %session.session_id,
        completed = session.completed,
        "Session updated"
    );
    Ok(Json(session))
}

/// DELETE /api/sessions/{session_id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(session_id): PathParam<String>,
) -> AppResult<StatusCode> {
    if SessionRepo::delete(&state.pool, &session_id).await? {
        tracing::info!(session_id = %session_id, "Session deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::session_not_found(&session_id)))
    }
}

/// GET /api/sessions/{session_id}/responses
pub async fn responses(
    State(state): State<AppState>,
    PathParam(session_id): PathParam<String>,
) -> AppResult<Json<SessionResponses>> {
    let aggregate = SessionRepo::find_with_responses(&state.pool, &session_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::session_not_found(&session_id)))?;
    Ok(Json(aggregate))
}

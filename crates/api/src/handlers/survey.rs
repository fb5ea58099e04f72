//! Handlers for post-trial feedback and the SAM and NASA-TLX questionnaires.

use axum::extract::State;
use axum::Json;
use pupil_db::models::feedback::{CreateFeedbackResponse, FeedbackResponse};
use pupil_db::models::sam::{CreateSamResponse, SamResponse};
use pupil_db::models::tlx::{CreateTlxResponse, TlxResponse};
use pupil_db::repositories::{FeedbackRepo, SamRepo, TlxRepo};

use crate::error::AppResult;
use crate::handlers::ensure_session_exists;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// POST /api/feedback-responses
pub async fn create_feedback(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateFeedbackResponse>,
) -> AppResult<Json<FeedbackResponse>> {
    ensure_session_exists(&state.pool, &input.session_id).await?;
    let feedback = FeedbackRepo::create(&state.pool, &input).await?;
    tracing::info!(
        session_id = %feedback.session_id,
        trial_id = feedback.trial_id,
        "Feedback recorded"
    );
    Ok(Json(feedback))
}

/// POST /api/sam-responses
pub async fn create_sam(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSamResponse>,
) -> AppResult<Json<SamResponse>> {
    ensure_session_exists(&state.pool, &input.session_id).await?;
    let sam = SamRepo::create(&state.pool, &input).await?;
    tracing::info!(session_id = %sam.session_id, "SAM response recorded");
    Ok(Json(sam))
}

/// POST /api/tlx-responses
pub async fn create_tlx(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTlxResponse>,
) -> AppResult<Json<TlxResponse>> {
    ensure_session_exists(&state.pool, &input.session_id).await?;
    let tlx = TlxRepo::create(&state.pool, &input).await?;
    tracing::info!(session_id = %tlx.session_id, "TLX response recorded");
    Ok(Json(tlx))
}

use axum::extract::State;
use axum::Json;
use pupil_db::models::trial_response::{CreateTrialResponse, TrialResponse};
use pupil_db::repositories::TrialResponseRepo;

use crate::error::AppResult;
use crate::handlers::ensure_session_exists;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// POST /api/trial-responses
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTrialResponse>,
) -> AppResult<Json<TrialResponse>> {
    ensure_session_exists(&state.pool, &input.session_id).await?;
    let response = TrialResponseRepo::create(&state.pool, &input).await?;
    tracing::info!(
        session_id = %response.session_id,
        trial_id = response.trial_id,
        "Trial response recorded"
    );
    Ok(Json(response))
}

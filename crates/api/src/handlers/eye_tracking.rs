use axum::extract::State;
use axum::Json;
use pupil_db::models::eye_tracking::{CreateEyeTrackingSample, EyeTrackingSample};
use pupil_db::repositories::EyeTrackingRepo;

use crate::error::AppResult;
use crate::handlers::ensure_session_exists;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// POST /api/eye-tracking
///
/// Samples arrive at high frequency, so success is logged at debug.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateEyeTrackingSample>,
) -> AppResult<Json<EyeTrackingSample>> {
    ensure_session_exists(&state.pool, &input.session_id).await?;
    let sample = EyeTrackingRepo::create(&state.pool, &input).await?;
    tracing::debug!(
        session_id = %sample.session_id,
        trial_id = sample.trial_id,
        "Eye-tracking sample recorded"
    );
    Ok(Json(sample))
}

//! Handlers for the `/trials` catalog.

use axum::extract::State;
use axum::Json;
use pupil_core::error::CoreError;
use pupil_db::models::trial::{CreateTrial, Trial};
use pupil_db::repositories::TrialRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::path_param::PathParam;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// POST /api/trials
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTrial>,
) -> AppResult<Json<Trial>> {
    let trial = TrialRepo::create(&state.pool, &input).await?;
    tracing::info!(trial_id = trial.trial_id, "Trial added to catalog");
    Ok(Json(trial))
}

/// GET /api/trials
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Trial>>> {
    let trials = TrialRepo::list(&state.pool).await?;
    Ok(Json(trials))
}

/// GET /api/trials/{trial_id}
pub async fn get_by_trial_id(
    State(state): State<AppState>,
    PathParam(trial_id): PathParam<i32>,
) -> AppResult<Json<Trial>> {
    let trial = TrialRepo::find_by_trial_id(&state.pool, trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Trial",
                key: trial_id.to_string(),
            })
        })?;
    Ok(Json(trial))
}

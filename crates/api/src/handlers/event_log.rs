use axum::extract::State;
use axum::Json;
use pupil_db::models::event_log::{CreateEventLog, EventLog};
use pupil_db::repositories::EventLogRepo;

use crate::error::AppResult;
use crate::handlers::ensure_session_exists;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// POST /api/event-logs
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateEventLog>,
) -> AppResult<Json<EventLog>> {
    ensure_session_exists(&state.pool, &input.session_id).await?;
    let event = EventLogRepo::create(&state.pool, &input).await?;
    tracing::info!(
        session_id = %event.session_id,
        event_type = %event.event_type,
        "Event logged"
    );
    Ok(Json(event))
}

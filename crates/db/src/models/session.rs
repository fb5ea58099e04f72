//! Study session model and DTOs.

use pupil_core::types::{DbId, EpochMillis, Timestamp};
use pupil_core::validation::{MAX_ID_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::event_log::EventLog;
use crate::models::trial_response::TrialResponse;

/// A row from the `study_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudySession {
    pub id: DbId,
    pub session_id: String,
    pub participant_id: String,
    pub start_time: EpochMillis,
    pub end_time: Option<EpochMillis>,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for starting a session. Re-sending an existing `session_id` is a no-op.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSession {
    #[validate(length(max = MAX_ID_LEN))]
    pub session_id: String,
    #[validate(length(max = MAX_ID_LEN))]
    pub participant_id: String,
    pub start_time: EpochMillis,
    #[serde(default)]
    pub completed: bool,
}

/// DTO for updating a session. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSession {
    pub completed: Option<bool>,
    pub end_time: Option<EpochMillis>,
}

/// A session together with its trial responses and event logs.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponses {
    pub session: StudySession,
    pub trial_responses: Vec<TrialResponse>,
    pub event_logs: Vec<EventLog>,
}

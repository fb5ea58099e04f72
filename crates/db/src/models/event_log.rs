//! Client event log model and DTO.

use pupil_core::types::{DbId, EpochMillis, Timestamp};
use pupil_core::validation::{validate_json_object, MAX_EVENT_TYPE_LEN, MAX_ID_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `event_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventLog {
    pub id: DbId,
    pub session_id: String,
    pub event_type: String,
    pub event_data: Option<serde_json::Value>,
    pub timestamp: EpochMillis,
    pub created_at: Timestamp,
}

/// DTO for recording a client-side event.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventLog {
    #[validate(length(max = MAX_ID_LEN))]
    pub session_id: String,
    #[validate(length(max = MAX_EVENT_TYPE_LEN))]
    pub event_type: String,
    /// Free-form payload; must be a JSON object when present.
    #[validate(custom(function = "validate_json_object"))]
    pub event_data: Option<serde_json::Value>,
    pub timestamp: EpochMillis,
}

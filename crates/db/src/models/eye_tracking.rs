//! Eye-tracking sample model and DTO.

use pupil_core::types::{DbId, EpochMillis, Timestamp};
use pupil_core::validation::{MAX_ID_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `eye_tracking_data` table.
///
/// Readings are nullable: the tracker may drop gaze or pupil values for a frame.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EyeTrackingSample {
    pub id: DbId,
    pub session_id: String,
    pub trial_id: i32,
    pub timestamp: EpochMillis,
    pub gaze_x: Option<f64>,
    pub gaze_y: Option<f64>,
    pub pupil_diameter: Option<f64>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEyeTrackingSample {
    #[validate(length(max = MAX_ID_LEN))]
    pub session_id: String,
    pub trial_id: i32,
    pub timestamp: EpochMillis,
    pub gaze_x: Option<f64>,
    pub gaze_y: Option<f64>,
    pub pupil_diameter: Option<f64>,
}

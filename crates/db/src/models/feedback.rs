//! Post-trial feedback survey model and DTO.

use pupil_core::types::{DbId, EpochMillis, Timestamp};
use pupil_core::validation::{MAX_ID_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `feedback_responses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackResponse {
    pub id: DbId,
    pub session_id: String,
    pub participant_id: String,
    pub trial_id: i32,
    pub question_id: i32,
    pub mental_effort: i32,
    pub confidence: i32,
    pub familiarity: i32,
    pub timestamp: EpochMillis,
    pub created_at: Timestamp,
}

/// DTO for recording one feedback answer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedbackResponse {
    #[validate(length(max = MAX_ID_LEN))]
    pub session_id: String,
    #[validate(length(max = MAX_ID_LEN))]
    pub participant_id: String,
    pub trial_id: i32,
    pub question_id: i32,
    pub mental_effort: i32,
    pub confidence: i32,
    pub familiarity: i32,
    pub timestamp: EpochMillis,
}

//! Trial response model and DTO.

use pupil_core::types::{DbId, EpochMillis, Timestamp};
use pupil_core::validation::{MAX_ID_LEN, MAX_OPTION_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `trial_responses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrialResponse {
    pub id: DbId,
    pub session_id: String,
    pub participant_id: String,
    pub trial_id: i32,
    pub question_number: i32,
    pub selected_option: String,
    pub stimulus_start_time: EpochMillis,
    pub answer_time: EpochMillis,
    pub next_clicked_time: EpochMillis,
    pub cross_start_time: EpochMillis,
    pub cross_end_time: EpochMillis,
    /// Milliseconds from stimulus onset to answer, as measured by the client.
    pub response_time: i32,
    pub timestamp: EpochMillis,
    pub created_at: Timestamp,
}

/// DTO for recording one trial answer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrialResponse {
    #[validate(length(max = MAX_ID_LEN))]
    pub session_id: String,
    #[validate(length(max = MAX_ID_LEN))]
    pub participant_id: String,
    pub trial_id: i32,
    pub question_number: i32,
    #[validate(length(max = MAX_OPTION_LEN))]
    pub selected_option: String,
    pub stimulus_start_time: EpochMillis,
    pub answer_time: EpochMillis,
    pub next_clicked_time: EpochMillis,
    pub cross_start_time: EpochMillis,
    pub cross_end_time: EpochMillis,
    pub response_time: i32,
    pub timestamp: EpochMillis,
}

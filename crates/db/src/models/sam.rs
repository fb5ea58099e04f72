//! Self-Assessment Manikin (SAM) survey model and DTO.

use pupil_core::types::{DbId, EpochMillis, Timestamp};
use pupil_core::validation::{MAX_ID_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `sam_responses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SamResponse {
    pub id: DbId,
    pub session_id: String,
    pub participant_id: String,
    pub pleasure: i32,
    pub arousal: i32,
    pub dominance: i32,
    pub timestamp: EpochMillis,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSamResponse {
    #[validate(length(max = MAX_ID_LEN))]
    pub session_id: String,
    #[validate(length(max = MAX_ID_LEN))]
    pub participant_id: String,
    pub pleasure: i32,
    pub arousal: i32,
    pub dominance: i32,
    pub timestamp: EpochMillis,
}

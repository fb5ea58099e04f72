//! NASA Task Load Index (TLX) survey model and DTO.

use pupil_core::types::{DbId, EpochMillis, Timestamp};
use pupil_core::validation::{MAX_ID_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tlx_responses` table. One integer per TLX dimension.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TlxResponse {
    pub id: DbId,
    pub session_id: String,
    pub participant_id: String,
    pub mental_demand: i32,
    pub physical_demand: i32,
    pub temporal_demand: i32,
    pub performance: i32,
    pub effort: i32,
    pub frustration: i32,
    pub timestamp: EpochMillis,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTlxResponse {
    #[validate(length(max = MAX_ID_LEN))]
    pub session_id: String,
    #[validate(length(max = MAX_ID_LEN))]
    pub participant_id: String,
    pub mental_demand: i32,
    pub physical_demand: i32,
    pub temporal_demand: i32,
    pub performance: i32,
    pub effort: i32,
    pub frustration: i32,
    pub timestamp: EpochMillis,
}

//! Trial catalog model and DTO.

use pupil_core::types::{DbId, Timestamp};
use pupil_core::validation::{MAX_OPTION_LEN, MAX_URL_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `trials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trial {
    pub id: DbId,
    pub trial_id: i32,
    pub stimulus_url: String,
    pub question: String,
    pub correct_answer: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrial {
    pub trial_id: i32,
    #[validate(length(max = MAX_URL_LEN))]
    pub stimulus_url: String,
    pub question: String,
    #[validate(length(max = MAX_OPTION_LEN))]
    pub correct_answer: Option<String>,
}

//! Repository for the `feedback_responses` table.

use sqlx::PgPool;

use crate::models::feedback::{CreateFeedbackResponse, FeedbackResponse};

const COLUMNS: &str = "id, session_id, participant_id, trial_id, question_id, \
                       mental_effort, confidence, familiarity, timestamp, created_at";

pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert a new feedback response, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFeedbackResponse,
    ) -> Result<FeedbackResponse, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback_responses
                (session_id, participant_id, trial_id, question_id,
                 mental_effort, confidence, familiarity, timestamp)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeedbackResponse>(&query)
            .bind(&input.session_id)
            .bind(&input.participant_id)
            .bind(input.trial_id)
            .bind(input.question_id)
            .bind(input.mental_effort)
            .bind(input.confidence)
            .bind(input.familiarity)
            .bind(input.timestamp)
            .fetch_one(pool)
            .await
    }
}

//! Repository for the `trial_responses` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::trial_response::{CreateTrialResponse, TrialResponse};

const COLUMNS: &str = "id, session_id, participant_id, trial_id, question_number, \
                       selected_option, stimulus_start_time, answer_time, next_clicked_time, \
                       cross_start_time, cross_end_time, response_time, timestamp, created_at";

/// Append-only access to trial responses.
pub struct TrialResponseRepo;

impl TrialResponseRepo {
    /// Insert a new trial response, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTrialResponse,
    ) -> Result<TrialResponse, sqlx::Error> {
        let query = format!(
            "INSERT INTO trial_responses
                (session_id, participant_id, trial_id, question_number, selected_option,
                 stimulus_start_time, answer_time, next_clicked_time, cross_start_time,
                 cross_end_time, response_time, timestamp)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrialResponse>(&query)
            .bind(&input.session_id)
            .bind(&input.participant_id)
            .bind(input.trial_id)
            .bind(input.question_number)
            .bind(&input.selected_option)
            .bind(input.stimulus_start_time)
            .bind(input.answer_time)
            .bind(input.next_clicked_time)
            .bind(input.cross_start_time)
            .bind(input.cross_end_time)
            .bind(input.response_time)
            .bind(input.timestamp)
            .fetch_one(pool)
            .await
    }

    /// List a session's trial responses in the order they were answered.
    pub async fn list_by_session<'e, E>(
        executor: E,
        session_id: &str,
    ) -> Result<Vec<TrialResponse>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM trial_responses
             WHERE session_id = $1
             ORDER BY timestamp, id"
        );
        sqlx::query_as::<_, TrialResponse>(&query)
            .bind(session_id)
            .fetch_all(executor)
            .await
    }
}

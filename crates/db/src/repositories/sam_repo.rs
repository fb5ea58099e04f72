//! Repository for the `sam_responses` table.

use sqlx::PgPool;

use crate::models::sam::{CreateSamResponse, SamResponse};

const COLUMNS: &str =
    "id, session_id, participant_id, pleasure, arousal, dominance, timestamp, created_at";

pub struct SamRepo;

impl SamRepo {
    /// Insert a new SAM response, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSamResponse,
    ) -> Result<SamResponse, sqlx::Error> {
        let query = format!(
            "INSERT INTO sam_responses
                (session_id, participant_id, pleasure, arousal, dominance, timestamp)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SamResponse>(&query)
            .bind(&input.session_id)
            .bind(&input.participant_id)
            .bind(input.pleasure)
            .bind(input.arousal)
            .bind(input.dominance)
            .bind(input.timestamp)
            .fetch_one(pool)
            .await
    }
}

//! Repository for the `trials` stimulus catalog.

use sqlx::PgPool;

use crate::models::trial::{CreateTrial, Trial};

const COLUMNS: &str = "id, trial_id, stimulus_url, question, correct_answer, created_at";

pub struct TrialRepo;

impl TrialRepo {
    /// Insert a catalog entry. A duplicate `trial_id` violates `uq_trials_trial_id`.
    pub async fn create(pool: &PgPool, input: &CreateTrial) -> Result<Trial, sqlx::Error> {
        let query = format!(
            "INSERT INTO trials (trial_id, stimulus_url, question, correct_answer)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trial>(&query)
            .bind(input.trial_id)
            .bind(&input.stimulus_url)
            .bind(&input.question)
            .bind(&input.correct_answer)
            .fetch_one(pool)
            .await
    }

    /// Find a catalog entry by its natural `trial_id`.
    pub async fn find_by_trial_id(
        pool: &PgPool,
        trial_id: i32,
    ) -> Result<Option<Trial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trials WHERE trial_id = $1");
        sqlx::query_as::<_, Trial>(&query)
            .bind(trial_id)
            .fetch_optional(pool)
            .await
    }

    /// List the whole catalog ordered by `trial_id`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Trial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trials ORDER BY trial_id");
        sqlx::query_as::<_, Trial>(&query).fetch_all(pool).await
    }
}

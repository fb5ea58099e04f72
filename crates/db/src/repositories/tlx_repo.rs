//! Repository for the `tlx_responses` table.

use sqlx::PgPool;

use crate::models::tlx::{CreateTlxResponse, TlxResponse};

const COLUMNS: &str = "id, session_id, participant_id, mental_demand, physical_demand, \
                       temporal_demand, performance, effort, frustration, timestamp, created_at";

pub struct TlxRepo;

impl TlxRepo {
    /// Insert a new NASA-TLX response, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTlxResponse,
    ) -> Result<TlxResponse, sqlx::Error> {
        let query = format!(
            "INSERT INTO tlx_responses
                (session_id, participant_id, mental_demand, physical_demand,
                 temporal_demand, performance, effort, frustration, timestamp)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TlxResponse>(&query)
            .bind(&input.session_id)
            .bind(&input.participant_id)
            .bind(input.mental_demand)
            .bind(input.physical_demand)
            .bind(input.temporal_demand)
            .bind(input.performance)
            .bind(input.effort)
            .bind(input.frustration)
            .bind(input.timestamp)
            .fetch_one(pool)
            .await
    }
}

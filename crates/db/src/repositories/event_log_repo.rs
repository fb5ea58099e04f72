//! Repository for the `event_logs` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::event_log::{CreateEventLog, EventLog};

const COLUMNS: &str = "id, session_id, event_type, event_data, timestamp, created_at";

/// Append-only access to client event logs.
pub struct EventLogRepo;

impl EventLogRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEventLog) -> Result<EventLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_logs (session_id, event_type, event_data, timestamp)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventLog>(&query)
            .bind(&input.session_id)
            .bind(&input.event_type)
            .bind(&input.event_data)
            .bind(input.timestamp)
            .fetch_one(pool)
            .await
    }

    /// List a session's events in client-time order.
    pub async fn list_by_session<'e, E>(
        executor: E,
        session_id: &str,
    ) -> Result<Vec<EventLog>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM event_logs
             WHERE session_id = $1
             ORDER BY timestamp, id"
        );
        sqlx::query_as::<_, EventLog>(&query)
            .bind(session_id)
            .fetch_all(executor)
            .await
    }
}

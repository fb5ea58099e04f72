//! Repository for the `study_sessions` table.

use sqlx::PgPool;

use crate::models::session::{CreateSession, SessionResponses, StudySession, UpdateSession};
use crate::repositories::{EventLogRepo, TrialResponseRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_id, participant_id, start_time, end_time, completed, \
                       created_at, updated_at";

/// Provides lifecycle operations for study sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a session unless one with the same `session_id` already exists.
    ///
    /// Returns the stored row and whether this call inserted it. An existing
    /// row is returned unchanged; the supplied fields are ignored.
    pub async fn create_or_get(
        pool: &PgPool,
        input: &CreateSession,
    ) -> Result<(StudySession, bool), sqlx::Error> {
        let query = format!(
            "INSERT INTO study_sessions (session_id, participant_id, start_time, completed)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (session_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, StudySession>(&query)
            .bind(&input.session_id)
            .bind(&input.participant_id)
            .bind(input.start_time)
            .bind(input.completed)
            .fetch_optional(pool)
            .await?;

        if let Some(session) = inserted {
            return Ok((session, true));
        }

        // Conflict: a row with this session_id is already stored.
        tracing::debug!(session_id = %input.session_id, "Session exists, returning stored row");
        let query = format!("SELECT {COLUMNS} FROM study_sessions WHERE session_id = $1");
        let existing = sqlx::query_as::<_, StudySession>(&query)
            .bind(&input.session_id)
            .fetch_one(pool)
            .await?;
        Ok((existing, false))
    }

    /// Find a session by its client-generated `session_id`.
    pub async fn find_by_session_id(
        pool: &PgPool,
        session_id: &str,
    ) -> Result<Option<StudySession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM study_sessions WHERE session_id = $1");
        sqlx::query_as::<_, StudySession>(&query)
            .bind(session_id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a session exists without loading it.
    pub async fn exists(pool: &PgPool, session_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM study_sessions WHERE session_id = $1)")
            .bind(session_id)
            .fetch_one(pool)
            .await
    }

    /// Update a session. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `session_id` exists.
    pub async fn update(
        pool: &PgPool,
        session_id: &str,
        input: &UpdateSession,
    ) -> Result<Option<StudySession>, sqlx::Error> {
        let query = format!(
            "UPDATE study_sessions SET
                completed = COALESCE($2, completed),
                end_time = COALESCE($3, end_time)
             WHERE session_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudySession>(&query)
            .bind(session_id)
            .bind(input.completed)
            .bind(input.end_time)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a session. Child rows go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, session_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM study_sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load a session with its trial responses and event logs.
    ///
    /// All three reads share one transaction so the arrays match the session
    /// row they are returned with. Returns `None` if the session is absent.
    pub async fn find_with_responses(
        pool: &PgPool,
        session_id: &str,
    ) -> Result<Option<SessionResponses>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM study_sessions WHERE session_id = $1");
        let session = sqlx::query_as::<_, StudySession>(&query)
            .bind(session_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(session) = session else {
            tx.commit().await?;
            return Ok(None);
        };

        let trial_responses = TrialResponseRepo::list_by_session(&mut *tx, session_id).await?;
        let event_logs = EventLogRepo::list_by_session(&mut *tx, session_id).await?;

        tx.commit().await?;
        Ok(Some(SessionResponses {
            session,
            trial_responses,
            event_logs,
        }))
    }
}

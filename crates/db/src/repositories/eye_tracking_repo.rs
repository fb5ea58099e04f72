//! Repository for the `eye_tracking_data` table.

use sqlx::PgPool;

use crate::models::eye_tracking::{CreateEyeTrackingSample, EyeTrackingSample};

const COLUMNS: &str =
    "id, session_id, trial_id, timestamp, gaze_x, gaze_y, pupil_diameter, created_at";

/// Append-only access to gaze/pupil samples.
pub struct EyeTrackingRepo;

impl EyeTrackingRepo {
    /// Insert one sample, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEyeTrackingSample,
    ) -> Result<EyeTrackingSample, sqlx::Error> {
        let query = format!(
            "INSERT INTO eye_tracking_data
                (session_id, trial_id, timestamp, gaze_x, gaze_y, pupil_diameter)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EyeTrackingSample>(&query)
            .bind(&input.session_id)
            .bind(input.trial_id)
            .bind(input.timestamp)
            .bind(input.gaze_x)
            .bind(input.gaze_y)
            .bind(input.pupil_diameter)
            .fetch_one(pool)
            .await
    }
}

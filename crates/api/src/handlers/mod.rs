//! Request handlers for study data.
//!
//! Each submodule provides async handler functions for one record type.
//! Handlers delegate to the corresponding repository in `pupil_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod event_log;
pub mod eye_tracking;
pub mod session;
pub mod survey;
pub mod trial;
pub mod trial_response;

use pupil_core::error::CoreError;
use pupil_db::repositories::SessionRepo;
use pupil_db::DbPool;

use crate::error::AppResult;

/// Fail with a 404 unless a session with `session_id` is stored.
///
/// Child records are only accepted for known sessions.
pub(crate) async fn ensure_session_exists(pool: &DbPool, session_id: &str) -> AppResult<()> {
    if SessionRepo::exists(pool, session_id).await? {
        Ok(())
    } else {
        Err(CoreError::session_not_found(session_id).into())
    }
}

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or any `PgExecutor`) as the first argument. Every call
//! borrows a pooled connection for the duration of its statement.

pub mod event_log_repo;
pub mod eye_tracking_repo;
pub mod feedback_repo;
pub mod sam_repo;
pub mod session_repo;
pub mod tlx_repo;
pub mod trial_repo;
pub mod trial_response_repo;

pub use event_log_repo::EventLogRepo;
pub use eye_tracking_repo::EyeTrackingRepo;
pub use feedback_repo::FeedbackRepo;
pub use sam_repo::SamRepo;
pub use session_repo::SessionRepo;
pub use tlx_repo::TlxRepo;
pub use trial_repo::TrialRepo;
pub use trial_response_repo::TrialResponseRepo;

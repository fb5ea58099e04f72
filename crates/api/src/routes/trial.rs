use axum::routing::get;
use axum::Router;

use crate::handlers::trial;
use crate::state::AppState;

/// Routes mounted at `/trials`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{trial_id}    -> get_by_trial_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trial::list).post(trial::create))
        .route("/{trial_id}", get(trial::get_by_trial_id))
}

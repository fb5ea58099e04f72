use axum::routing::{get, post};
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// POST   /                          -> create
/// GET    /{session_id}              -> get_by_id
/// PUT    /{session_id}              -> update
/// DELETE /{session_id}              -> delete
/// GET    /{session_id}/responses    -> responses
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(session::create))
        .route(
            "/{session_id}",
            get(session::get_by_id)
                .put(session::update)
                .delete(session::delete),
        )
        .route("/{session_id}/responses", get(session::responses))
}

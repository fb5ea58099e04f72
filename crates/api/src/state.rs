/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup. Cheaply cloneable: the pool is a handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pupil_db::DbPool,
}

use axum::extract::Request;
use axum::http::header::ORIGIN;
use axum::middleware::Next;
use axum::response::Response;

/// Log method, path, and `Origin` of each request, then pass it on.
///
/// Mounted with `axum::middleware::from_fn` only when `LOG_REQUESTS` is set.
pub async fn log_request(request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    tracing::debug!(
        method = %request.method(),
        path = %request.uri().path(),
        origin,
        "Incoming request"
    );
    next.run(request).await
}

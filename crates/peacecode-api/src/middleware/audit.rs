use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request logging middleware.
///
/// One structured `api_request` event per call with method, route, status
/// and latency. Bodies are never logged; they carry questionnaire answers.
/// Server errors are raised to `warn` so they stand out in CloudWatch.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    if status.is_server_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), latency_ms, "api_request");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), latency_ms, "api_request");
    }

    response
}

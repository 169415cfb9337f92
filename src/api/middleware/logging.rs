//! Request/response logging.
//!
//! One line in, one line out, both tagged with the correlation id so a
//! request can be followed through the log stream. Server errors are
//! logged at error level, everything else at info.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{error, info};

use super::RequestId;

/// Middleware logging every request with outcome and timing.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.as_str().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    info!(%method, %path, %request_id, "Request received");

    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let status = response.status();

    if status.is_server_error() {
        error!(status = status.as_u16(), elapsed_ms, %request_id, "Request failed");
    } else {
        info!(status = status.as_u16(), elapsed_ms, %request_id, "Response sent");
    }

    response
}

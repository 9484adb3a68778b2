//! Logging middleware
//!
//! Logs every request with its outcome and latency.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::{info, warn};
use std::time::Instant;

/// Log a request once its response is ready
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = started.elapsed();
    if status.is_server_error() {
        warn!("{} {} -> {} ({:?})", method, path, status, elapsed);
    } else {
        info!("{} {} -> {} ({:?})", method, path, status, elapsed);
    }

    response
}

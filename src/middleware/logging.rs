//! Logging middleware

use axum::{
    body::Body,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// Request logging middleware
///
/// Logs the matched route template when available so that per-registration
/// paths group together.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if status.is_server_error() {
        warn!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    } else if status.is_client_error() {
        info!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request rejected"
        );
    } else {
        info!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    }

    response
}

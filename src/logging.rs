use axum::{
    extract::{MatchedPath, Request},
    http::header,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};

/// Logs every request with the caller's `Origin`, so cross-origin portal
/// traffic can be told apart from same-origin calls and probes. An unlisted
/// origin produces no server-side error (the browser enforces the block),
/// so this log line is the only place such traffic is visible.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = uuid::Uuid::new_v4();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("same-origin")
        .to_string();

    info!(%request_id, %method, %path, %origin, "Incoming request");

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    match status {
        200..=299 => {
            info!(%request_id, %method, %path, %origin, status, latency_ms, "Request completed");
        }
        400..=499 => {
            warn!(%request_id, %method, %path, %origin, status, latency_ms, "Client error");
        }
        500..=599 => {
            error!(%request_id, %method, %path, %origin, status, latency_ms, "Server error");
        }
        _ => {
            info!(%request_id, %method, %path, %origin, status, latency_ms, "Request completed");
        }
    }

    response
}

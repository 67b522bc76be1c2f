use axum::{body::Body, extract::Request, response::Response};
use std::time::Duration;
use tracing::Span;
use uuid::Uuid;

/// Open a per-request span carrying a fresh request id, so every log line of
/// a request can be correlated.
pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::span!(
        tracing::Level::INFO,
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::event!(tracing::Level::INFO, "[REQUEST START]");
}

pub fn on_response(response: &Response, latency: Duration, _span: &Span) {
    tracing::event!(
        tracing::Level::INFO,
        latency = ?latency,
        status = %response.status(),
        "[REQUEST END]"
    );
}

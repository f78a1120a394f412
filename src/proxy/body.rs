//! Per-method request body handling.
//!
//! # Design Decisions
//! - GET and HEAD never carry a body toward the backend, even when the
//!   caller sent one; some transports reject bodies on these methods
//! - The full body is buffered up to a configured cap; streaming is not
//!   worth the error-handling surface for ordinary API payloads
//! - A read failure or an empty body forwards with no body instead of
//!   failing the whole call

use axum::body::{to_bytes, Body, Bytes};
use axum::http::Method;

/// Read the inbound body for forwarding, or decide to drop it.
pub async fn read_request_body(method: &Method, body: Body, max_bytes: usize) -> Option<Bytes> {
    if method == Method::GET || method == Method::HEAD {
        return None;
    }

    match to_bytes(body, max_bytes).await {
        Ok(bytes) if bytes.is_empty() => None,
        Ok(bytes) => Some(bytes),
        Err(err) => {
            tracing::warn!(error = %err, "failed to read request body, forwarding without one");
            None
        }
    }
}

//! Cross-origin policy for browser-facing responses.
//!
//! # Responsibilities
//! - Attach the fixed CORS header set to every response, success or error
//! - Answer OPTIONS preflights with 204 and an empty body, without ever
//!   touching the backend

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderValue, Response, StatusCode};

use crate::config::ProxyConfig;

/// Methods the front-end is allowed to use through the proxy.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, OPTIONS";

/// Headers the front-end is allowed to send through the proxy.
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization, Cookie";

/// Precomputed CORS header set, shared by all handlers.
#[derive(Clone, Debug)]
pub struct CorsPolicy {
    headers: HeaderMap,
}

impl CorsPolicy {
    /// Build the policy from the configured front origin.
    ///
    /// The origin was validated as a header value at config load; an
    /// invalid value here falls back to wildcard rather than taking the
    /// process down mid-flight.
    pub fn from_config(config: &ProxyConfig) -> Self {
        let origin = HeaderValue::from_str(&config.front_origin).unwrap_or_else(|_| {
            tracing::warn!(
                front_origin = %config.front_origin,
                "front origin is not a valid header value, falling back to wildcard"
            );
            HeaderValue::from_static("*")
        });

        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        Self { headers }
    }

    /// Stamp the CORS headers onto a response, overriding anything the
    /// backend may have sent under the same names.
    pub fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
    }

    /// Answer a CORS preflight: 204, the policy headers, empty body.
    pub fn preflight(&self) -> Response<Body> {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::NO_CONTENT;
        self.apply(response.headers_mut());
        response
    }
}

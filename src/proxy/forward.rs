//! The outbound call to the backend origin.
//!
//! # Responsibilities
//! - Issue exactly one HTTP call per inbound request
//! - Never follow redirects; 3xx responses are data to relay
//! - Buffer the full backend response for translation
//!
//! # Design Decisions
//! - Redirect following would leak the proxy's network identity into
//!   the redirect chain and could loop, so it is disabled on the client
//! - No retries and no core-imposed timeout; the transport's defaults
//!   apply

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode};

use crate::error::ProxyError;

/// The single request issued toward the backend.
#[derive(Debug)]
pub struct OutboundRequest {
    pub url: String,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// The backend's answer, fully buffered.
#[derive(Debug)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Outbound HTTP client wrapper. Cheap to clone; the underlying client
/// is reference-counted and shared across all request handlers.
#[derive(Clone, Debug)]
pub struct Forwarder {
    client: reqwest::Client,
}

impl Forwarder {
    /// Build the outbound client. Redirect following is disabled for the
    /// lifetime of the process.
    pub fn new() -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(ProxyError::ClientInit)?;
        Ok(Self { client })
    }

    /// Send the outbound request and buffer the backend's response.
    ///
    /// Any network-level failure (DNS, connection refused, timeout, TLS)
    /// surfaces as `BackendUnreachable` for the error boundary.
    pub async fn send(&self, request: OutboundRequest) -> Result<BackendResponse, ProxyError> {
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            has_body = request.body.is_some(),
            "forwarding request to backend"
        );

        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(ProxyError::BackendUnreachable)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(ProxyError::BackendUnreachable)?;

        tracing::debug!(status = %status, bytes = body.len(), "backend responded");

        Ok(BackendResponse {
            status,
            headers,
            body,
        })
    }
}

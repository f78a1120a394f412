//! Error types for the request pipeline.
//!
//! Only configuration errors (see `config::loader`) are allowed to
//! terminate the process. Every error below is recovered by the error
//! boundary in `http::server` into a well-formed HTTP response; callers
//! never observe a transport-level failure.

use thiserror::Error;

/// Errors produced while forwarding a request to the backend.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Network-level failure reaching the backend: DNS, connection
    /// refused, timeout, TLS.
    #[error("backend unreachable: {0}")]
    BackendUnreachable(#[source] reqwest::Error),

    /// The outbound HTTP client could not be constructed at startup.
    #[error("outbound client initialization failed: {0}")]
    ClientInit(#[source] reqwest::Error),
}

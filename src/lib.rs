//! Browser-facing reverse-proxy shim for a single fixed backend origin.
//!
//! The proxy receives requests under a public path prefix, rewrites
//! path/headers/cookies, forwards each request to one configured backend,
//! and relays the backend response with adjusted headers (CORS, cookie
//! attributes, content framing). No routing table, no load balancing,
//! no persistence.

// Core subsystems
pub mod config;
pub mod error;
pub mod http;
pub mod proxy;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

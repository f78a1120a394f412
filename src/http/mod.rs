//! HTTP surface of the proxy.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, single catch-all handler)
//!     → request.rs (attach x-request-id)
//!     → [proxy pipeline resolves, translates, forwards]
//!     → response.rs (translate backend response, rewrite cookies)
//!     → cors.rs (attach CORS headers, answer preflight)
//!     → Send to client
//! ```

pub mod cors;
pub mod request;
pub mod response;
pub mod server;

pub use cors::CorsPolicy;
pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;

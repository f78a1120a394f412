//! Request-side translation pipeline.
//!
//! # Data Flow
//! ```text
//! inbound request (method, path, query, headers, body)
//!     → path.rs (strip public prefix, derive backend URL)
//!     → headers.rs (hop-by-hop denylist, credential passthrough)
//!     → body.rs (per-method body buffering)
//!     → forward.rs (one outbound call, redirects never followed)
//!     → BackendResponse (status, headers, raw bytes)
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound call per inbound call; no retries, no fan-out
//! - The backend is the authority on header/body validation
//! - Full buffering over streaming: payloads are ordinary API sizes

pub mod body;
pub mod forward;
pub mod headers;
pub mod path;

pub use forward::{BackendResponse, Forwarder, OutboundRequest};

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (BACKEND_URL, BACKEND_URL_PREFIX, FRONT_URL, ...)
//!     → loader.rs (read & normalize)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc to all request handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - BACKEND_URL is the only required value; everything else defaults
//! - Validation separates syntactic (parsing) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::ProxyConfig;
pub use schema::ResponseMode;

//! Configuration schema definitions.
//!
//! All types derive Serde traits so a config can also be serialized for
//! diagnostics. Values are normalized on construction (trailing slashes,
//! prefix leading slash) so the rest of the crate can concatenate URL
//! parts without re-checking.

use serde::{Deserialize, Serialize};

/// Root configuration for the proxy shim.
///
/// Immutable after loading; shared read-only by all concurrent request
/// handlers via `Arc`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProxyConfig {
    /// Absolute URL of the single backend origin (e.g. "https://api.example.com").
    /// Required; the process refuses to start without it.
    pub backend_origin: String,

    /// Path prefix prepended on the backend side (e.g. "/shop/api").
    /// May be empty.
    pub backend_prefix: String,

    /// Public path prefix the proxy is exposed under, stripped before
    /// forwarding.
    pub public_prefix: String,

    /// Origin allowed by the CORS policy. Defaults to wildcard.
    pub front_origin: String,

    /// Response translation strategy.
    pub response_mode: ResponseMode,

    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Request buffering limits.
    pub limits: LimitsConfig,
}

impl ProxyConfig {
    /// Build a config with the given backend origin and defaults for
    /// everything else.
    pub fn new(backend_origin: impl Into<String>) -> Self {
        Self {
            backend_origin: normalize_origin(backend_origin.into()),
            backend_prefix: String::new(),
            public_prefix: "/proxy".to_string(),
            front_origin: "*".to_string(),
            response_mode: ResponseMode::default(),
            listener: ListenerConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

/// Strategy for translating the backend response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    /// Relay the backend's raw bytes and headers (minus framing headers).
    #[default]
    Passthrough,

    /// Normalize the backend body into a JSON array envelope and respond
    /// with `content-type: application/json`; backend headers other than
    /// `set-cookie` are discarded.
    JsonEnvelope,
}

impl std::str::FromStr for ResponseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "passthrough" | "raw" => Ok(ResponseMode::Passthrough),
            "json_envelope" | "json" => Ok(ResponseMode::JsonEnvelope),
            other => Err(format!("unknown response mode: {other}")),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g. "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Buffering limits for inbound request bodies.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum inbound body size buffered before forwarding, in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Trim trailing slashes so origin + prefix concatenation never yields "//".
pub(crate) fn normalize_origin(origin: String) -> String {
    let trimmed = origin.trim_end_matches('/');
    if trimmed.len() == origin.len() {
        origin
    } else {
        trimmed.to_string()
    }
}

/// Normalize a path prefix: empty stays empty, otherwise exactly one
/// leading slash and no trailing slash.
pub(crate) fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

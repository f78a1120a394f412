//! Configuration loading from the process environment.

use crate::config::schema::{normalize_prefix, ProxyConfig};
use crate::config::validation::{validate_config, ValidationError};
use thiserror::Error;

/// Required: absolute URL of the backend origin.
pub const ENV_BACKEND_URL: &str = "BACKEND_URL";
/// Optional: path prefix appended on the backend side.
pub const ENV_BACKEND_URL_PREFIX: &str = "BACKEND_URL_PREFIX";
/// Optional: front-end origin allowed by CORS (default "*").
pub const ENV_FRONT_URL: &str = "FRONT_URL";
/// Optional: public prefix the proxy is exposed under (default "/proxy").
pub const ENV_PUBLIC_PREFIX: &str = "PUBLIC_PREFIX";
/// Optional: listener bind address (default "0.0.0.0:8080").
pub const ENV_LISTEN_ADDR: &str = "LISTEN_ADDR";
/// Optional: response translation strategy, "passthrough" or "json" (default
/// "passthrough").
pub const ENV_RESPONSE_MODE: &str = "RESPONSE_MODE";

/// Error type for configuration loading. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{ENV_BACKEND_URL} is not set; refusing to start without a backend origin")]
    MissingBackendOrigin,

    #[error("{ENV_RESPONSE_MODE}: {0}")]
    InvalidResponseMode(String),

    #[error("validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from the process environment.
pub fn from_env() -> Result<ProxyConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build a config from a key-lookup function. Split out from `from_env`
/// so tests never have to mutate process-global environment state.
fn from_lookup<F>(lookup: F) -> Result<ProxyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let backend_origin = get(ENV_BACKEND_URL).ok_or(ConfigError::MissingBackendOrigin)?;
    let mut config = ProxyConfig::new(backend_origin);

    if let Some(prefix) = get(ENV_BACKEND_URL_PREFIX) {
        config.backend_prefix = normalize_prefix(&prefix);
    }
    if let Some(front) = get(ENV_FRONT_URL) {
        config.front_origin = front;
    }
    if let Some(prefix) = get(ENV_PUBLIC_PREFIX) {
        config.public_prefix = normalize_prefix(&prefix);
    }
    if let Some(addr) = get(ENV_LISTEN_ADDR) {
        config.listener.bind_address = addr;
    }
    if let Some(mode) = get(ENV_RESPONSE_MODE) {
        config.response_mode = mode.parse().map_err(ConfigError::InvalidResponseMode)?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

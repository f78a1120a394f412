//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (the loader handles syntactic)
//! - Check the backend origin is an absolute http(s) URL
//! - Check the front origin and bind address are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use axum::http::HeaderValue;
use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("backend origin is not an absolute http(s) URL: {0}")]
    BackendOriginNotHttp(String),

    #[error("front origin is not a valid header value: {0}")]
    FrontOriginInvalid(String),

    #[error("listener bind address is not a socket address: {0}")]
    BindAddressInvalid(String),
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.backend_origin) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::BackendOriginNotHttp(
            config.backend_origin.clone(),
        )),
    }

    if HeaderValue::from_str(&config.front_origin).is_err() {
        errors.push(ValidationError::FrontOriginInvalid(
            config.front_origin.clone(),
        ));
    }

    if config
        .listener
        .bind_address
        .parse::<std::net::SocketAddr>()
        .is_err()
    {
        errors.push(ValidationError::BindAddressInvalid(
            config.listener.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

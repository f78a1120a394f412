//! Path resolution for the single backend origin.
//!
//! # Design Decisions
//! - No normalization of ".." segments; the backend is the authority
//! - Query strings are never parsed, only appended verbatim
//! - An exact prefix match forwards to the backend prefix itself,
//!   not to `prefix + "/"`, so backend routes without a trailing
//!   slash still match

use crate::config::ProxyConfig;

/// Strip the public prefix and a single leading slash from an inbound
/// path. Returns the empty string when the path does not start with the
/// prefix, which maps to proxying the backend's root.
pub fn resolve_target_path<'a>(path: &'a str, public_prefix: &str) -> &'a str {
    match path.strip_prefix(public_prefix) {
        Some(rest) => rest.strip_prefix('/').unwrap_or(rest),
        None => "",
    }
}

/// Build the outbound URL: origin + backend prefix + resolved path +
/// verbatim query.
pub fn backend_url(config: &ProxyConfig, target_path: &str, query: Option<&str>) -> String {
    let mut url = String::with_capacity(
        config.backend_origin.len()
            + config.backend_prefix.len()
            + target_path.len()
            + query.map_or(0, |q| q.len() + 1)
            + 1,
    );
    url.push_str(&config.backend_origin);
    url.push_str(&config.backend_prefix);
    if !target_path.is_empty() {
        url.push('/');
        url.push_str(target_path);
    }
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    url
}

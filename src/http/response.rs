//! Backend response translation.
//!
//! # Responsibilities
//! - Copy backend status and headers toward the caller
//! - Strip headers invalidated by proxying (content framing)
//! - Rewrite `set-cookie` attributes for cross-site delivery
//! - Optionally normalize the body into a JSON array envelope
//!
//! # Design Decisions
//! - Two mutually exclusive strategies, selected once by config
//! - The outbound client hands back a decoded body, so the backend's
//!   `content-encoding` must not be re-sent
//! - `content-length`/`transfer-encoding`/`connection` are recomputed
//!   by the serving transport and never copied

use axum::body::Body;
use axum::http::{header, HeaderValue, Response};
use serde_json::Value;

use crate::config::ResponseMode;
use crate::proxy::BackendResponse;

/// Backend response headers never relayed to the caller.
const RESPONSE_DENYLIST: [&str; 4] = [
    "content-encoding",
    "content-length",
    "transfer-encoding",
    "connection",
];

/// Attributes appended to every relayed cookie. The proxy and backend
/// sit on different origins, so the session cookie must be marked for
/// cross-site use and HTTPS-only delivery regardless of how the backend
/// issued it.
const COOKIE_SUFFIX: &str = "; HttpOnly; Secure; SameSite=None; Path=/";

/// Translate a backend response into the response relayed to the caller.
pub fn translate(mode: ResponseMode, backend: BackendResponse) -> Response<Body> {
    match mode {
        ResponseMode::Passthrough => passthrough(backend),
        ResponseMode::JsonEnvelope => json_envelope(backend),
    }
}

/// Raw passthrough: body bytes unchanged, headers copied minus the
/// denylist, cookies re-emitted rewritten.
fn passthrough(backend: BackendResponse) -> Response<Body> {
    let mut response = Response::new(Body::from(backend.body));
    *response.status_mut() = backend.status;

    let headers = response.headers_mut();
    for (name, value) in &backend.headers {
        if *name == header::SET_COOKIE || RESPONSE_DENYLIST.contains(&name.as_str()) {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    relay_cookies(&backend.headers, headers);

    response
}

/// JSON normalization: the body always becomes a JSON array, the
/// content type always `application/json`. Non-JSON bodies are wrapped
/// as a single-element list of raw text; this is a recovery, never an
/// error. Backend headers other than `set-cookie` are discarded.
fn json_envelope(backend: BackendResponse) -> Response<Body> {
    let value = match serde_json::from_slice::<Value>(&backend.body) {
        Ok(value) => value,
        Err(_) => Value::Array(vec![Value::String(
            String::from_utf8_lossy(&backend.body).into_owned(),
        )]),
    };
    let value = if value.is_array() {
        value
    } else {
        Value::Array(vec![value])
    };

    let mut response = Response::new(Body::from(value.to_string()));
    *response.status_mut() = backend.status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    relay_cookies(&backend.headers, response.headers_mut());

    response
}

/// Append every backend `set-cookie` value, rewritten for cross-site use.
fn relay_cookies(backend: &axum::http::HeaderMap, out: &mut axum::http::HeaderMap) {
    for value in backend.get_all(header::SET_COOKIE) {
        let raw = match value.to_str() {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "dropping non-ASCII set-cookie value");
                continue;
            }
        };
        let rewritten = rewrite_set_cookie(raw);
        match HeaderValue::from_str(&rewritten) {
            Ok(value) => {
                out.append(header::SET_COOKIE, value);
            }
            Err(err) => {
                tracing::warn!(error = %err, "dropping unrepresentable set-cookie value");
            }
        }
    }
}

/// Strip any existing `SameSite=...` and `Secure` attributes, then
/// append the fixed cross-site suffix.
pub fn rewrite_set_cookie(raw: &str) -> String {
    let kept: Vec<&str> = raw
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter(|part| {
            !part.eq_ignore_ascii_case("secure")
                && !part
                    .get(..9)
                    .is_some_and(|head| head.eq_ignore_ascii_case("samesite="))
        })
        .collect();
    let mut rewritten = kept.join("; ");
    rewritten.push_str(COOKIE_SUFFIX);
    rewritten
}

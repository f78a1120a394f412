//! Inbound header translation.
//!
//! # Responsibilities
//! - Copy inbound headers onto the outbound request
//! - Strip hop-by-hop headers that only belong to the caller↔proxy leg
//! - Guarantee credential (cookie / authorization) propagation
//!
//! # Design Decisions
//! - No header value validation; the backend is the authority
//! - `accept-encoding` is dropped so the outbound client negotiates
//!   compression itself and always hands back a decoded body

use axum::http::{header, HeaderMap};

/// Headers never forwarded to the backend. `host`, `connection` and
/// `content-length` are connection-scoped or recomputed by the outbound
/// transport; `accept-encoding` is owned by the outbound client.
pub const REQUEST_DENYLIST: [&str; 4] = ["host", "connection", "content-length", "accept-encoding"];

/// Build the outbound header set from the inbound one.
///
/// Every inbound header outside the denylist is copied (multi-valued
/// headers keep all values). `cookie` and `authorization` are then
/// re-set explicitly so credential propagation never depends on the
/// generic copy.
pub fn outbound_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut outbound = HeaderMap::with_capacity(inbound.len());
    for (name, value) in inbound {
        if REQUEST_DENYLIST.contains(&name.as_str()) {
            continue;
        }
        outbound.append(name.clone(), value.clone());
    }

    if let Some(cookie) = inbound.get(header::COOKIE) {
        outbound.insert(header::COOKIE, cookie.clone());
    }
    if let Some(auth) = inbound.get(header::AUTHORIZATION) {
        outbound.insert(header::AUTHORIZATION, auth.clone());
    }

    outbound
}

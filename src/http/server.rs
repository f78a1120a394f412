//! HTTP server setup and the proxy handler.
//!
//! # Responsibilities
//! - Create the Axum router with a single catch-all handler
//! - Wire up middleware (request ID, tracing)
//! - Orchestrate the per-request pipeline:
//!   path resolution → header translation → body adapter → forwarder
//!   → response translation → CORS
//! - Error boundary: any pipeline failure becomes a 500 JSON response

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Method, Request, Response, StatusCode},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::http::cors::CorsPolicy;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::http::response::translate;
use crate::proxy::body::read_request_body;
use crate::proxy::headers::outbound_headers;
use crate::proxy::path::{backend_url, resolve_target_path};
use crate::proxy::{Forwarder, OutboundRequest};

/// Application state injected into the handler. Read-only and cheap to
/// clone; shared by any number of concurrent requests without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub forwarder: Forwarder,
    pub cors: CorsPolicy,
}

/// HTTP server for the proxy shim.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, ProxyError> {
        let cors = CorsPolicy::from_config(&config);
        let state = AppState {
            config: Arc::new(config),
            forwarder: Forwarder::new()?,
            cors,
        };
        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main proxy handler: answers preflights locally, forwards everything
/// else to the backend, and never lets a failure escape as anything but
/// a well-formed HTTP response.
async fn proxy_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Response<Body> {
    // Preflight never reaches the backend.
    if request.method() == Method::OPTIONS {
        tracing::debug!(path = %request.uri().path(), "answering CORS preflight");
        return state.cors.preflight();
    }

    let request_id = request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    match forward_to_backend(&state, request).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(request_id = %request_id, error = %err, "proxy pipeline failed");
            failure_response(&state.cors, &err)
        }
    }
}

/// The success path: one outbound call, one translated response.
async fn forward_to_backend(
    state: &AppState,
    request: Request<Body>,
) -> Result<Response<Body>, ProxyError> {
    let config = &state.config;
    let (parts, body) = request.into_parts();

    let target_path = resolve_target_path(parts.uri.path(), &config.public_prefix);
    let url = backend_url(config, target_path, parts.uri.query());

    tracing::debug!(method = %parts.method, url = %url, "proxying request");

    let mut headers = outbound_headers(&parts.headers);
    let body = read_request_body(&parts.method, body, config.limits.max_body_bytes).await;

    // A content type travels with the body, but an explicitly copied one
    // is never overwritten.
    if body.is_some() && !headers.contains_key(header::CONTENT_TYPE) {
        if let Some(content_type) = parts.headers.get(header::CONTENT_TYPE) {
            headers.insert(header::CONTENT_TYPE, content_type.clone());
        }
    }

    let backend = state
        .forwarder
        .send(OutboundRequest {
            url,
            method: parts.method,
            headers,
            body,
        })
        .await?;

    let mut response = translate(config.response_mode, backend);
    state.cors.apply(response.headers_mut());
    Ok(response)
}

/// Error boundary: a fixed-shape 500 with a JSON message and the same
/// CORS headers as a success response.
fn failure_response(cors: &CorsPolicy, err: &ProxyError) -> Response<Body> {
    let body = serde_json::json!({ "message": err.to_string() }).to_string();
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    cors.apply(response.headers_mut());
    response
}

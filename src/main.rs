//! front-proxy entry point.
//!
//! Startup order: tracing first, then configuration (fatal when the
//! backend origin is missing), then the listener, then the server.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use front_proxy::config;
use front_proxy::http::HttpServer;
use front_proxy::lifecycle::{signals, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "front_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("front-proxy v0.1.0 starting");

    // Load configuration; a missing backend origin refuses to start.
    let config = config::loader::from_env()?;

    tracing::info!(
        backend_origin = %config.backend_origin,
        backend_prefix = %config.backend_prefix,
        public_prefix = %config.public_prefix,
        front_origin = %config.front_origin,
        response_mode = ?config.response_mode,
        "configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("shutdown complete");
    Ok(())
}

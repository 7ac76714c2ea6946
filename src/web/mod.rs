// flowgen — Web UI module (Axum + HTMX)
//
// Serves the single-page generator: one textarea, one button, one result
// region. The generate handler blocks on the completion round-trip.

pub mod handlers;
pub mod templates;

use crate::config::Config;
use crate::generator::Generator;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared state for web handlers.
pub struct WebState {
    pub generator: Generator,
    pub config: Config,
}

/// Start the generator web server.
pub async fn start_web_server(
    addr: SocketAddr,
    generator: Generator,
    config: Config,
) -> anyhow::Result<()> {
    let state = Arc::new(WebState { generator, config });

    let app = Router::new()
        .route("/", axum::routing::get(handlers::index))
        .route("/generate", axum::routing::post(handlers::generate))
        .route("/api/status", axum::routing::get(handlers::api_status))
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!(addr = %addr, "Starting generator web server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! HTTP API.
//!
//! One endpoint:
//! - `POST /api/analyze` with `{"url": "..."}` returns the analysis as JSON.
//!
//! CORS admits the configured browser origin. Each request runs on its own
//! task; the only shared state is the analyzer behind an `Arc`.

mod handlers;
mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::analyzer::Analyzer;
use crate::config::Config;
use crate::fetch::{Fetcher, HttpFetcher};

pub use handlers::analyze_handler;
pub use types::{AnalyzeRequest, AppState, ErrorResponse};

/// Builds the API router around an analyzer.
///
/// # Errors
///
/// Fails if `allowed_origin` is not a valid header value.
pub fn create_router<F>(analyzer: Arc<Analyzer<F>>, allowed_origin: &str) -> anyhow::Result<Router>
where
    F: Fetcher + 'static,
{
    let origin = HeaderValue::from_str(allowed_origin)
        .with_context(|| format!("Invalid allowed origin: {}", allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let state = AppState { analyzer };
    let api_routes = Router::new()
        .route("/analyze", post(analyze_handler::<F>))
        .with_state(state);

    Ok(Router::new().nest("/api", api_routes).layer(cors))
}

/// Binds the configured address and serves the API until the process stops.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let fetcher =
        HttpFetcher::from_config(config).context("Failed to initialize HTTP client")?;
    let analyzer = Arc::new(Analyzer::new(fetcher));
    let app = create_router(analyzer, &config.allowed_origin)?;

    let address = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}: {}", address, e))?;

    log::info!("API server listening on http://{}/", address);
    log::info!("  - Analyze: POST http://{}/api/analyze", address);
    log::info!("  - CORS origin: {}", config.allowed_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    log::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

//! Explainer Server Library
//!
//! HTTP boundary for the code explainer: one `/explain` endpoint in front of
//! the `ExplanationService` facade, plus a health check.

pub mod routes;
pub mod state;

use axum::{
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use explainer_core::ExplanationService;
use std::net::SocketAddr;
use std::sync::Once;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use state::AppState;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber (only once)
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG")
                    .unwrap_or_else(|_| "explainer_server=debug,tower_http=debug".into()),
            ))
            .with(tracing_subscriber::fmt::layer())
            .init();
    });
}

/// Build the axum router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/explain", post(routes::explain))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Run the explainer server on the specified port
pub async fn run_server(port: u16) -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting explainer server...");

    // Load configuration once; credentials are validated eagerly below.
    let cwd = std::env::current_dir()?;
    let config = explainer_core::load_config(&cwd)?;

    let service = ExplanationService::from_config(&config)?;
    tracing::info!("Active provider: {}", service.provider().name());

    let state = AppState::new(config, service);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": explainer_core::version()
    }))
}

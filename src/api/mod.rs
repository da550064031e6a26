mod handlers;
mod types;
mod state;
pub mod page;
pub use handlers::*;
pub use types::*;
pub use state::*;

use tokio::net::TcpListener;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use std::sync::Arc;
use std::net::SocketAddr;
use tracing::info;
use anyhow::Result;
use std::time::Duration;
use crate::config::ServerConfig;

pub fn router(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        // Core endpoints
        .route("/health", get(health_check))

        // Upload form
        .route("/", get(show_form).post(submit_form))

        // JSON variant of the form post
        .route("/api/compare", post(compare))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    // Create socket address
    let addr = format!("{}:{}", config.host, config.port)
        .parse::<SocketAddr>()?;

    // Create application state
    let state = Arc::new(AppState::new(config));
    let app = router(state);

    // Create TCP listener
    let listener = TcpListener::bind(&addr).await?;

    info!("Comparison server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

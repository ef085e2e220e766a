pub mod api;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod init;
pub mod runtime_host;
pub mod state;
pub mod stats;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the application router with all routes wired.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::dashboard_handler))
        .route("/health", get(api::health_handler))
        .route("/api/stats", get(api::stats_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

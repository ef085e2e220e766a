use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::Local;
use serde::Serialize;

use crate::db::queries::ReminderStats;
use crate::state::AppState;
use crate::stats;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    uptime_seconds: u64,
    database: &'static str,
    stats: ReminderStats,
}

/// GET /health — liveness probe. Always 200 while the process serves requests.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let stats = stats::fetch_stats(state.config.db_path.clone(), Local::now().naive_local()).await;
    let database = if state.database_present() {
        "connected"
    } else {
        "initializing"
    };

    Json(HealthResponse {
        status: "healthy",
        uptime_seconds: state.uptime().as_secs(),
        database,
        stats,
    })
}

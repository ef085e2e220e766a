use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::{Local, SecondsFormat};
use serde::Serialize;

use crate::db::queries::ReminderStats;
use crate::state::AppState;
use crate::stats;

#[derive(Serialize)]
pub struct StatsResponse {
    success: bool,
    timestamp: String,
    stats: ReminderStats,
}

/// GET /api/stats — reminder counts with the time they were read.
pub async fn stats_handler(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let now = Local::now();
    let stats = stats::fetch_stats(state.config.db_path.clone(), now.naive_local()).await;

    Json(StatsResponse {
        success: true,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Micros, false),
        stats,
    })
}

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use chrono::Local;

use crate::dashboard::{DashboardView, format_uptime, render_dashboard};
use crate::state::AppState;
use crate::stats;

/// GET / — HTML status page.
pub async fn dashboard_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let now = Local::now();
    let stats = stats::fetch_stats(state.config.db_path.clone(), now.naive_local()).await;
    let db_status = if state.database_present() {
        "Connected"
    } else {
        "Initializing"
    };

    Html(render_dashboard(&DashboardView {
        status: "Running",
        uptime: format_uptime(state.uptime()),
        stats,
        last_check: now.format("%H:%M:%S").to_string(),
        db_status,
    }))
}

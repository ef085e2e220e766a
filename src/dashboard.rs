use std::time::Duration;

use crate::db::queries::ReminderStats;

pub const RELOAD_AFTER_MS: u64 = 30_000;

/// Values substituted into the status page.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub status: &'static str,
    pub uptime: String,
    pub stats: ReminderStats,
    pub last_check: String,
    pub db_status: &'static str,
}

/// `"{hours}h {minutes}m"`, truncating seconds.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
}

pub fn render_dashboard(view: &DashboardView) -> String {
    let ReminderStats {
        total,
        pending,
        overdue,
        completed,
    } = view.stats;

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Reminder Server</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>{STYLE}</style>
    <script>
        setTimeout(() => location.reload(), {RELOAD_AFTER_MS});
    </script>
</head>
<body>
    <div class="container">
        <h1><span class="emoji">⏰</span>Reminder Server</h1>
        <p class="subtitle">Status Dashboard</p>

        <div class="status">
            <div class="status-item">
                <span class="label">Server Status</span>
                <span class="value"><span class="badge badge-success">{status}</span></span>
            </div>
            <div class="status-item">
                <span class="label">Uptime</span>
                <span class="value">{uptime}</span>
            </div>
            <div class="status-item">
                <span class="label">Total Reminders</span>
                <span class="value">{total}</span>
            </div>
            <div class="status-item">
                <span class="label">Pending</span>
                <span class="value"><span class="badge badge-info">{pending}</span></span>
            </div>
            <div class="status-item">
                <span class="label">Overdue</span>
                <span class="value"><span class="badge badge-warning">{overdue}</span></span>
            </div>
            <div class="status-item">
                <span class="label">Completed</span>
                <span class="value"><span class="badge badge-success">{completed}</span></span>
            </div>
            <div class="status-item">
                <span class="label">Last Check</span>
                <span class="value">{last_check}</span>
            </div>
        </div>

        <div class="refresh-note">
            📡 This page auto-refreshes every {reload_secs} seconds<br>
            💾 Database: {db_status}
        </div>

        <div class="footer">
            <p>Reminder Status Server v{version}</p>
        </div>
    </div>
</body>
</html>
"#,
        status = view.status,
        uptime = view.uptime,
        last_check = view.last_check,
        db_status = view.db_status,
        reload_secs = RELOAD_AFTER_MS / 1000,
        version = env!("CARGO_PKG_VERSION"),
    )
}

const STYLE: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 20px;
        }
        .container {
            background: white;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            padding: 40px;
            max-width: 600px;
            width: 100%;
        }
        h1 { color: #667eea; margin-bottom: 10px; font-size: 2em; }
        .subtitle { color: #666; margin-bottom: 30px; font-size: 1.1em; }
        .status { background: #f7fafc; border-radius: 10px; padding: 20px; margin-bottom: 20px; }
        .status-item {
            display: flex;
            justify-content: space-between;
            padding: 12px 0;
            border-bottom: 1px solid #e2e8f0;
        }
        .status-item:last-child { border-bottom: none; }
        .label { color: #4a5568; font-weight: 600; }
        .value { color: #2d3748; font-weight: 500; }
        .badge {
            display: inline-block;
            padding: 4px 12px;
            border-radius: 12px;
            font-size: 0.85em;
            font-weight: 600;
        }
        .badge-success { background: #c6f6d5; color: #22543d; }
        .badge-warning { background: #feebc8; color: #7c2d12; }
        .badge-info { background: #bee3f8; color: #2c5282; }
        .footer { text-align: center; color: #718096; margin-top: 30px; font-size: 0.9em; }
        .emoji { font-size: 1.5em; margin-right: 8px; }
        .refresh-note {
            background: #edf2f7;
            padding: 15px;
            border-radius: 8px;
            margin-top: 20px;
            font-size: 0.9em;
            color: #4a5568;
        }
"#;

mod dashboard;
mod health;
mod stats;

pub use dashboard::dashboard_handler;
pub use health::health_handler;
pub use stats::stats_handler;

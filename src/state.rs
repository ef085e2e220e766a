use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;

/// Immutable context handed to every route handler.
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self {
            config,
            start_time: Instant::now(),
        })
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Whether the database file is present. Says nothing about whether it is readable.
    pub fn database_present(&self) -> bool {
        self.config.db_path.exists()
    }
}

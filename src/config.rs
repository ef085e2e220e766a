use std::env;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "/app/data/reminders.db";
pub const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration shared by the status server and the initializer.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub db_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: parse_env("PORT", DEFAULT_PORT),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            db_path: db_path_from_env(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `DB_PATH`, or the default location under the application data directory.
pub fn db_path_from_env() -> PathBuf {
    env::var("DB_PATH")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH))
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

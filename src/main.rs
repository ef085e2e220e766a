use tracing::{error, info};

use reminder_status::config::Config;
use reminder_status::runtime_host::start_with_config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reminder_status=info".parse().unwrap()),
        )
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let host = match start_with_config(config).await {
        Ok(host) => host,
        Err(err) => {
            error!("failed to start on {bind_addr}: {err}");
            std::process::exit(1);
        }
    };
    info!("reminder-status listening on {}", host.local_addr());

    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
    }

    info!("shutting down");
    if let Err(err) = host.stop().await {
        error!("{err}");
        std::process::exit(1);
    }
}

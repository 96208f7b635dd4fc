use anyhow::{Context, Result};
use dotenv::dotenv;
use rewards::{handler::AppRouter, state::AppState};
use shared::{config::Config, utils::Logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let logger = Logger::new("api", config.is_dev);

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    info!("🚀 Reward service starting on port {}", config.port);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");
    logger.shutdown();

    Ok(())
}

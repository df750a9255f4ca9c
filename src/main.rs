mod api;
mod config;
mod error;
mod homework;
mod notify;
mod poller;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::StatusClient;
use crate::config::Config;
use crate::notify::TelegramSink;
use crate::poller::Poller;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,homework_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load credentials; a missing or malformed variable is fatal
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Refusing to start: {}", e);
            return Err(e).context("Configuration is incomplete");
        }
    };

    info!("Configuration loaded");
    info!("  Chat: {}", config.chat_id);
    info!("  Poll interval: {:?}", config::POLL_INTERVAL);

    let client = StatusClient::new(config.practicum_token.clone())
        .context("Failed to build the review API client")?;
    let sink = TelegramSink::new(&config.telegram_token, config.chat_id);

    let start_from = chrono::Utc::now().timestamp();
    info!("Bot is starting, polling from {}", start_from);

    Poller::new(client, sink, start_from).run().await;

    Ok(())
}

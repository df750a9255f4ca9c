use std::time::Duration;

use teloxide::types::ChatId;
use thiserror::Error;

/// Pause between polls of the review API.
pub const POLL_INTERVAL: Duration = Duration::from_secs(600);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("environment variable {name} has an invalid value: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// Credentials the bot needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Review API secret, sent as an OAuth header.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// The one chat all notifications go to.
    pub chat_id: ChatId,
}

impl Config {
    /// Load all three credentials from the environment.
    ///
    /// A missing variable, an empty value, or a chat id that is not an
    /// integer is fatal; the caller refuses to start the loop.
    pub fn from_env() -> Result<Self, ConfigError> {
        let practicum_token = require_var("PRACTICUM_TOKEN")?;
        let telegram_token = require_var("TELEGRAM_TOKEN")?;
        let chat_id = parse_chat_id(&require_var("TELEGRAM_CHAT_ID")?)?;

        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn parse_chat_id(raw: &str) -> Result<ChatId, ConfigError> {
    raw.trim()
        .parse::<i64>()
        .map(ChatId)
        .map_err(|e| ConfigError::InvalidVar {
            name: "TELEGRAM_CHAT_ID",
            reason: e.to_string(),
        })
}

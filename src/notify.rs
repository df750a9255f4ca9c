use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::info;

/// Anything that can deliver a notification line to the user.
#[async_trait]
pub trait MessageSink {
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram delivery to the one configured chat.
pub struct TelegramSink {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSink {
    pub fn new(token: &str, chat_id: ChatId) -> Self {
        Self {
            bot: Bot::new(token),
            chat_id,
        }
    }
}

#[async_trait]
impl MessageSink for TelegramSink {
    async fn send(&self, text: &str) -> Result<()> {
        self.bot.send_message(self.chat_id, text).await?;
        info!("Sent message to chat {}: {}", self.chat_id, text);
        Ok(())
    }
}

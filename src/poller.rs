use tracing::{debug, error, info};

use crate::api::StatusClient;
use crate::config::POLL_INTERVAL;
use crate::error::PollError;
use crate::homework;
use crate::notify::MessageSink;

/// The poll loop: fetch, validate, describe, notify, sleep.
///
/// Holds the only mutable state the bot has — the timestamp cursor and the
/// last message actually delivered.
pub struct Poller<S> {
    client: StatusClient,
    sink: S,
    cursor: i64,
    last_message: Option<String>,
}

impl<S: MessageSink> Poller<S> {
    pub fn new(client: StatusClient, sink: S, start_from: i64) -> Self {
        Self {
            client,
            sink,
            cursor: start_from,
            last_message: None,
        }
    }

    /// Poll forever. Iteration failures never abort the loop; each one is
    /// turned into a diagnostic chat message instead.
    pub async fn run(mut self) {
        loop {
            self.tick().await;
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// A single iteration, without the sleep.
    async fn tick(&mut self) {
        let candidate = match self.poll_once().await {
            Ok(Some(message)) => Some(message),
            Ok(None) => {
                info!("No homework updates");
                None
            }
            Err(e) => {
                let diagnostic = format!("Bot failure: {}", e);
                error!("{}", diagnostic);
                Some(diagnostic)
            }
        };

        if let Some(message) = candidate {
            self.dispatch(message).await;
        }
    }

    /// One fetch/validate/describe pass. `None` means nothing changed.
    async fn poll_once(&mut self) -> Result<Option<String>, PollError> {
        let body = self.client.fetch(self.cursor).await?;
        let page = homework::validate(body)?;
        self.cursor = page.current_date;

        match page.homeworks.first() {
            Some(latest) => homework::describe(latest).map(Some),
            None => Ok(None),
        }
    }

    /// Send `message` unless it repeats the previous delivered notification.
    ///
    /// The dedup state advances only on successful delivery, so a message
    /// lost to a Telegram outage is attempted again next iteration.
    async fn dispatch(&mut self, message: String) {
        if self.last_message.as_deref() == Some(message.as_str()) {
            debug!("Suppressing duplicate message: {}", message);
            return;
        }

        match self.sink.send(&message).await {
            Ok(()) => self.last_message = Some(message),
            Err(e) => error!("Failed to deliver message to Telegram: {}", e),
        }
    }
}

//! Message sink
//!
//! Where notifications go. Production sends through the Telegram bot bound
//! to the configured chat; tests substitute a recording fake.

use async_trait::async_trait;
use tracing::debug;

use reviewbot_client::{ClientError, TelegramBot};

/// Destination for outbound notifications
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Delivers one text message to the configured recipient
    async fn send(&self, text: &str) -> Result<(), ClientError>;
}

/// Telegram-backed message sink bound to a fixed chat
pub struct TelegramSink {
    bot: TelegramBot,
    chat_id: String,
}

impl TelegramSink {
    /// Creates a sink that delivers to `chat_id`
    pub fn new(bot: TelegramBot, chat_id: String) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl MessageSink for TelegramSink {
    async fn send(&self, text: &str) -> Result<(), ClientError> {
        debug!("Attempting to deliver notification");
        self.bot.send_message(&self.chat_id, text).await?;
        debug!("Notification delivered");
        Ok(())
    }
}

//! Telegram notifier that sends plain-text messages to one chat.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use tracing::info;

use crate::error::PollError;
use crate::port::Notifier;

/// Sends messages to a fixed Telegram chat through the Bot API.
///
/// Messages are sent without a parse mode: homework names routinely contain
/// characters that MarkdownV2 would reject.
pub struct TelegramNotifier {
    bot: Bot,
    recipient: Recipient,
    destination: String,
}

impl TelegramNotifier {
    /// Create a notifier for `destination`.
    ///
    /// A numeric destination is treated as a chat ID; anything else is used
    /// as a channel username such as `@my_channel`.
    #[must_use]
    pub fn new(bot_token: &str, destination: &str) -> Self {
        Self {
            bot: Bot::new(bot_token),
            recipient: parse_recipient(destination),
            destination: destination.to_string(),
        }
    }
}

fn parse_recipient(destination: &str) -> Recipient {
    match destination.trim().parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(destination.trim().to_string()),
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<(), PollError> {
        info!(destination = %self.destination, message, "Sending Telegram message");

        self.bot
            .send_message(self.recipient.clone(), message)
            .await
            .map_err(|e| PollError::DeliveryFailed {
                destination: self.destination.clone(),
                reason: e.to_string(),
            })?;

        info!(destination = %self.destination, "Telegram message sent");
        Ok(())
    }

    fn destination(&self) -> &str {
        &self.destination
    }
}

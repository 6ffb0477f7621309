//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the supported backends.

#[cfg(feature = "telegram")]
mod telegram;

#[cfg(feature = "telegram")]
pub use telegram::TelegramNotifier;

use async_trait::async_trait;
use tracing::info;

use crate::error::PollError;
use crate::port::Notifier;

/// A logging notifier that writes messages via tracing instead of
/// delivering them. Used for dry runs.
pub struct LogNotifier {
    destination: String,
}

impl LogNotifier {
    #[must_use]
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &str) -> Result<(), PollError> {
        info!(destination = %self.destination, message, "Dry run: message not delivered");
        Ok(())
    }

    fn destination(&self) -> &str {
        &self.destination
    }
}

//! Application services (use cases).
//!
//! Wires the configured adapters into a [`PollLoop`] and runs it.

mod poll;

pub use poll::{PollLoop, PollState, TickOutcome};

use std::sync::Arc;

use tracing::info;

use crate::adapter::notifier::LogNotifier;
use crate::adapter::practicum::PracticumClient;
use crate::config::{Config, Credentials};
use crate::port::{Notifier, ReviewSource};

/// Main application struct.
pub struct App;

impl App {
    /// Build the poll loop for `config`.
    #[must_use]
    pub fn build(config: &Config, credentials: &Credentials) -> PollLoop {
        let source: Arc<dyn ReviewSource> = Arc::new(PracticumClient::from_config(
            &config.practicum,
            credentials.practicum_token(),
        ));
        let notifier = build_notifier(config, credentials);

        PollLoop::new(source, notifier, config.poll_interval())
    }

    /// Run the watcher until the process is terminated.
    pub async fn run(config: &Config, credentials: &Credentials) {
        let mut poll_loop = Self::build(config, credentials);
        poll_loop.run().await;
    }
}

fn build_notifier(config: &Config, credentials: &Credentials) -> Arc<dyn Notifier> {
    if config.dry_run {
        info!("Dry-run mode enabled - messages will be logged, not sent");
        return Arc::new(LogNotifier::new(credentials.chat_id()));
    }

    #[cfg(feature = "telegram")]
    {
        Arc::new(crate::adapter::notifier::TelegramNotifier::new(
            credentials.telegram_token(),
            credentials.chat_id(),
        ))
    }

    #[cfg(not(feature = "telegram"))]
    {
        tracing::warn!("Built without the `telegram` feature - messages will be logged, not sent");
        Arc::new(LogNotifier::new(credentials.chat_id()))
    }
}

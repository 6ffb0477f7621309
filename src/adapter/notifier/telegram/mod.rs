//! Telegram message delivery.
//!
//! Requires the `telegram` feature to be enabled.

mod notifier;

pub use notifier::TelegramNotifier;

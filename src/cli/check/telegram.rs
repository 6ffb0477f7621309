use crate::adapter::notifier::TelegramNotifier;
use crate::cli::output;
use crate::config::Credentials;
use crate::error::Result;
use crate::port::Notifier;

/// Test Telegram delivery by sending a test message.
pub async fn execute_telegram() -> Result<()> {
    let credentials = Credentials::from_env()?;

    output::heading("Telegram");
    output::secret("Bot token", credentials.telegram_token());
    output::field("Chat ID", credentials.chat_id());

    let notifier = TelegramNotifier::new(credentials.telegram_token(), credentials.chat_id());
    notifier
        .send("reviewbot test message: notifications are configured.")
        .await?;

    output::passed("Telegram test message sent");
    Ok(())
}

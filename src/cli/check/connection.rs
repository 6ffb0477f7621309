use std::path::Path;

use crate::adapter::practicum::PracticumClient;
use crate::cli::output;
use crate::config::{Config, Credentials};
use crate::domain::{extract_timestamp, validate};
use crate::error::{PollError, Result};
use crate::port::ReviewSource;

/// Perform one request against the review API and summarize the answer.
pub async fn execute_connection(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let credentials = Credentials::from_env()?;

    output::heading("Review API");
    output::field("Endpoint", &config.practicum.endpoint);
    output::secret("API token", credentials.practicum_token());

    let client = PracticumClient::from_config(&config.practicum, credentials.practicum_token());
    let response = client.fetch(chrono::Utc::now().timestamp()).await?;
    output::passed("Review API answered with HTTP 200");

    match validate(&response) {
        Ok(update) => {
            output::field("current_date", update.current_date);
            let homework = update.homework;
            output::field("Latest", homework.name.as_deref().unwrap_or("(unnamed)"));
            output::field("Status", homework.status.as_deref().unwrap_or("(none)"));
        }
        Err(PollError::NoItemsAvailable) => {
            output::field("current_date", extract_timestamp(&response)?);
            output::caution("No homework reviewed since now; this is expected");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

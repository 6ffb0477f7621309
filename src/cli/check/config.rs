use std::path::Path;

use crate::cli::output;
use crate::config::{Config, Credentials};
use crate::error::Result;

/// Validate configuration and credentials without starting the watcher.
pub fn execute_config(config_path: Option<&Path>) -> Result<()> {
    output::heading("Configuration");
    match config_path {
        Some(path) => output::field("Config file", path.display()),
        None => output::field("Config file", "(none, using defaults)"),
    }

    let config = Config::load_or_default(config_path)?;
    output::passed("Configuration is valid");
    output::field("Endpoint", &config.practicum.endpoint);
    output::field("Interval", format!("{}s", config.poll.interval_secs));
    output::field(
        "HTTP timeout",
        format!("{}ms", config.practicum.http.timeout_ms),
    );
    output::field("Log level", &config.logging.level);
    if let Some(file) = &config.logging.file {
        output::field("Log file", file.display());
    }
    output::field("Dry-run", config.dry_run);

    let credentials = Credentials::from_env()?;
    output::passed("Credentials found");
    output::credentials(&credentials);

    if config.dry_run {
        output::caution("Dry-run is enabled: messages will be logged, not sent");
    }

    Ok(())
}

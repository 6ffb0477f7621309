//! Handler for the `run` command.

use tokio::signal;
use tracing::{error, info};

use crate::application::App;
use crate::cli::{Cli, RunArgs};
use crate::config::{Config, Credentials};
use crate::error::{ConfigError, Result};

/// Execute the run command.
///
/// Returns only on Ctrl-C or when startup fails; a missing credential stops
/// the process before the first request.
pub async fn execute(cli: &Cli, args: &RunArgs) -> Result<()> {
    let config = load_config(cli, args)?;

    config.init_logging()?;

    let credentials = Credentials::from_env().map_err(|e| {
        error!(error = %e, "Required environment variables are missing");
        e
    })?;

    info!(
        endpoint = %config.practicum.endpoint,
        chat_id = %credentials.chat_id(),
        interval_secs = config.poll.interval_secs,
        dry_run = config.dry_run,
        "reviewbot starting"
    );

    tokio::select! {
        () = App::run(&config, &credentials) => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("reviewbot stopped");
    Ok(())
}

/// Load configuration and apply command-line overrides.
fn load_config(cli: &Cli, args: &RunArgs) -> Result<Config> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;

    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    if args.dry_run {
        config.dry_run = true;
    }
    if let Some(secs) = args.interval_secs {
        if secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        config.poll.interval_secs = secs;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use crate::error::Error;

    fn cli() -> Cli {
        Cli {
            config: None,
            command: Commands::Run(RunArgs::default()),
        }
    }

    #[test]
    fn overrides_are_applied() {
        let args = RunArgs {
            log_level: Some("debug".into()),
            json_logs: true,
            dry_run: true,
            interval_secs: Some(5),
        };

        let config = load_config(&cli(), &args).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert!(config.dry_run);
        assert_eq!(config.poll.interval_secs, 5);
    }

    #[test]
    fn zero_interval_override_is_rejected() {
        let args = RunArgs {
            interval_secs: Some(0),
            ..RunArgs::default()
        };

        assert!(matches!(
            load_config(&cli(), &args),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "interval_secs",
                ..
            }))
        ));
    }
}

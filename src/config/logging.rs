//! Logging configuration and initialization.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Deserialize;
use tracing::Subscriber;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
    /// Optional file that receives a copy of everything written to stdout.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if !matches!(self.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got \"{}\"", self.format),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or a subscriber is
    /// already installed.
    pub fn init(&self) -> Result<()> {
        self.subscriber()?.try_init().map_err(|e| {
            ConfigError::InvalidValue {
                field: "logging",
                reason: e.to_string(),
            }
        })?;
        Ok(())
    }

    /// Build the subscriber without installing it. Events go to stdout and,
    /// when `file` is set, are appended to that file as well.
    pub(crate) fn subscriber(&self) -> Result<Box<dyn Subscriber + Send + Sync>> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let file = match &self.file {
            Some(path) => Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)?,
            ),
            None => None,
        };

        let builder = fmt().with_env_filter(filter);
        let subscriber: Box<dyn Subscriber + Send + Sync> = match (self.format.as_str(), file) {
            ("json", Some(file)) => Box::new(
                builder
                    .json()
                    .with_writer(std::io::stdout.and(Mutex::new(file)))
                    .finish(),
            ),
            ("json", None) => Box::new(builder.json().finish()),
            (_, Some(file)) => Box::new(
                builder
                    .with_ansi(false)
                    .with_writer(std::io::stdout.and(Mutex::new(file)))
                    .finish(),
            ),
            (_, None) => Box::new(builder.finish()),
        };

        Ok(subscriber)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            file: None,
        }
    }
}

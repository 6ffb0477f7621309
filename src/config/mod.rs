//! Application configuration loading and validation.
//!
//! Non-secret settings come from an optional TOML file; every field has a
//! default, so the watcher runs without one. Secrets come from the
//! environment via [`Credentials`].
//!
//! # Example
//!
//! ```toml
//! dry_run = false
//!
//! [poll]
//! interval_secs = 600
//!
//! [practicum]
//! endpoint = "https://practicum.yandex.ru/api/user_api/homework_statuses/"
//!
//! [practicum.http]
//! timeout_ms = 30000
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

mod credentials;
mod logging;

pub use credentials::{
    mask_secret, Credentials, PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR, TELEGRAM_TOKEN_VAR,
};
pub use logging::LoggingConfig;

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::adapter::practicum::PracticumConfig;
use crate::error::{ConfigError, Result};

/// Poll loop settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    /// Seconds to wait between two iterations.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

const fn default_interval_secs() -> u64 {
    600
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Log messages instead of delivering them.
    #[serde(default)]
    pub dry_run: bool,

    #[serde(default)]
    pub poll: PollConfig,

    /// Review API endpoint and HTTP client settings.
    #[serde(default)]
    pub practicum: PracticumConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if given, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll.interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.practicum.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "practicum.endpoint",
            }
            .into());
        }
        if let Err(e) = reqwest::Url::parse(&self.practicum.endpoint) {
            return Err(ConfigError::InvalidValue {
                field: "practicum.endpoint",
                reason: e.to_string(),
            }
            .into());
        }
        if self.practicum.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "practicum.http.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.practicum.http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "practicum.http.connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        self.logging.validate()
    }

    /// Initialize logging from the `[logging]` section.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured log file cannot be opened.
    pub fn init_logging(&self) -> Result<()> {
        self.logging.init()
    }

    /// Wait between two poll iterations.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll.interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::practicum::DEFAULT_ENDPOINT;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert!(!config.dry_run);
        assert_eq!(config.poll_interval(), Duration::from_secs(600));
        assert_eq!(config.practicum.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let result = Config::parse_toml("[poll]\ninterval_secs = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "poll.interval_secs",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_endpoint_is_rejected() {
        let result = Config::parse_toml("[practicum]\nendpoint = \"not a url\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "practicum.endpoint",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = Config::parse_toml("[poll\ninterval_secs = 1");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn missing_path_falls_back_to_defaults() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config.poll.interval_secs, 600);
    }
}

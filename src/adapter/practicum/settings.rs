//! Review API configuration.

use serde::Deserialize;

/// Endpoint used when the config file does not override it.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Review API client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PracticumConfig {
    /// Homework statuses endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// HTTP client settings.
    #[serde(default)]
    pub http: PracticumHttpConfig,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for PracticumConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            http: PracticumHttpConfig::default(),
        }
    }
}

/// Review API HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PracticumHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    30_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    10_000
}

impl Default for PracticumHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
        }
    }
}

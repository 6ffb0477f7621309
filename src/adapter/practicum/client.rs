//! Review API REST client.
//!
//! Performs one authenticated, timestamped request per call. There is no
//! retry here: the poll loop's interval is the retry policy.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::settings::PracticumConfig;
use crate::error::PollError;
use crate::port::ReviewSource;

/// HTTP client for the homework statuses endpoint.
pub struct PracticumClient {
    http: HttpClient,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a client with reqwest's default timeouts.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Create a client with the configured endpoint and timeouts.
    #[must_use]
    pub fn from_config(config: &PracticumConfig, token: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            endpoint: config.endpoint.clone(),
            token: token.into(),
        }
    }

    fn unreachable(&self, err: &reqwest::Error) -> PollError {
        let reason = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else {
            err.to_string()
        };
        PollError::ServerUnreachable {
            endpoint: self.endpoint.clone(),
            reason,
        }
    }
}

#[async_trait]
impl ReviewSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        info!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|err| self.unreachable(&err))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PollError::InvalidHttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.json::<Value>().await.map_err(|err| {
            if err.is_decode() {
                PollError::MalformedBody(err.to_string())
            } else {
                self.unreachable(&err)
            }
        })?;

        debug!(body = %body, "Received homework statuses");
        Ok(body)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

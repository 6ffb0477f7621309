//! Review source port.
//!
//! Abstracts the homework-review API so the poll loop can be driven by the
//! HTTP client in production and by scripted responses in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PollError;

/// Fetches raw review responses.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch homework updates since `from_date` (seconds since epoch).
    ///
    /// Returns the decoded JSON body without any schema validation.
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;

    /// Endpoint description for logging.
    fn endpoint(&self) -> &str;
}

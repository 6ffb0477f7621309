//! Notifier port for chat messages.
//!
//! This module defines the trait the poll loop uses to deliver status and
//! error messages to the configured destination.

use async_trait::async_trait;

use crate::error::PollError;

/// Trait for message delivery backends.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `send` performs a single delivery attempt; retrying is up to the caller
/// - Failures are reported as [`PollError::DeliveryFailed`]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message to the destination.
    async fn send(&self, message: &str) -> Result<(), PollError>;

    /// Destination identifier for logging.
    fn destination(&self) -> &str;
}

//! The poll loop: fetch, validate, format, notify, sleep.
//!
//! Each iteration runs to completion before the next one starts. Errors never
//! escape an iteration; they are logged and reported to the chat once per
//! distinct error.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::domain::{extract_latest, extract_timestamp};
use crate::error::{PollError, PollErrorKind};
use crate::port::{Notifier, ReviewSource};

/// Result of a single poll iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new status message was delivered.
    Notified,
    /// The status message equals the last delivered one; nothing was sent.
    Unchanged,
    /// The iteration failed. `reported` is true when the error text was
    /// delivered to the chat during this iteration.
    Failed {
        kind: PollErrorKind,
        reported: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ReportedError {
    kind: PollErrorKind,
    text: String,
}

/// State carried between iterations. Owned by the loop.
#[derive(Debug, Clone)]
pub struct PollState {
    last_timestamp: i64,
    last_sent_message: String,
    last_sent_error: Option<ReportedError>,
}

impl PollState {
    #[must_use]
    pub fn new(start_timestamp: i64) -> Self {
        Self {
            last_timestamp: start_timestamp,
            last_sent_message: String::new(),
            last_sent_error: None,
        }
    }

    /// `from_date` for the next request.
    #[must_use]
    pub const fn last_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    /// Last status message delivered, empty if none.
    #[must_use]
    pub fn last_sent_message(&self) -> &str {
        &self.last_sent_message
    }

    /// Text of the last error delivered, empty if none.
    #[must_use]
    pub fn last_sent_error(&self) -> &str {
        self.last_sent_error
            .as_ref()
            .map_or("", |reported| reported.text.as_str())
    }

    fn advance_timestamp(&mut self, current_date: i64) {
        if current_date < self.last_timestamp {
            warn!(
                current_date,
                last_timestamp = self.last_timestamp,
                "Server timestamp went backwards, keeping the previous one"
            );
            return;
        }
        self.last_timestamp = current_date;
    }
}

/// Watches one submission and forwards its status changes.
pub struct PollLoop {
    source: Arc<dyn ReviewSource>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    state: PollState,
}

impl PollLoop {
    /// Create a loop that starts polling from the current time.
    #[must_use]
    pub fn new(
        source: Arc<dyn ReviewSource>,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            notifier,
            interval,
            state: PollState::new(chrono::Utc::now().timestamp()),
        }
    }

    /// Override the initial `from_date`.
    #[must_use]
    pub fn with_start_timestamp(mut self, timestamp: i64) -> Self {
        self.state = PollState::new(timestamp);
        self
    }

    #[must_use]
    pub const fn state(&self) -> &PollState {
        &self.state
    }

    /// Run iterations forever, sleeping the fixed interval after each one.
    pub async fn run(&mut self) {
        info!(
            endpoint = %self.source.endpoint(),
            destination = %self.notifier.destination(),
            interval_secs = self.interval.as_secs(),
            from_date = self.state.last_timestamp,
            "Poll loop started"
        );

        loop {
            let outcome = self.tick().await;
            debug!(?outcome, "Iteration finished");
            sleep(self.interval).await;
        }
    }

    /// Run a single iteration without sleeping.
    pub async fn tick(&mut self) -> TickOutcome {
        match self.process().await {
            Ok(outcome) => outcome,
            Err(err) => self.report_error(err).await,
        }
    }

    async fn process(&mut self) -> Result<TickOutcome, PollError> {
        let response = self.source.fetch(self.state.last_timestamp).await?;

        let current_date = extract_timestamp(&response)?;
        self.state.advance_timestamp(current_date);

        let homework = extract_latest(&response)?;
        if let Some(comment) = &homework.reviewer_comment {
            debug!(
                reviewer_comment = %comment,
                date_updated = ?homework.date_updated,
                "Latest homework"
            );
        }

        let message = homework.status_message()?;
        if message == self.state.last_sent_message {
            debug!("Status unchanged, nothing to send");
            return Ok(TickOutcome::Unchanged);
        }

        self.notifier.send(&message).await?;
        self.state.last_sent_message = message;
        Ok(TickOutcome::Notified)
    }

    async fn report_error(&mut self, err: PollError) -> TickOutcome {
        let kind = err.kind();
        if kind == PollErrorKind::NoItemsAvailable {
            warn!(error = %err, "Nothing to report this cycle");
        } else {
            error!(error = %err, ?kind, "Poll iteration failed");
        }

        // Same kind and same text counts as the same error.
        let reported = ReportedError {
            kind,
            text: err.to_string(),
        };
        if self.state.last_sent_error.as_ref() == Some(&reported) {
            debug!(?kind, "Error already reported, not sending again");
            return TickOutcome::Failed {
                kind,
                reported: false,
            };
        }

        match self.notifier.send(&reported.text).await {
            Ok(()) => {
                self.state.last_sent_error = Some(reported);
                TickOutcome::Failed {
                    kind,
                    reported: true,
                }
            }
            Err(send_err) => {
                error!(
                    error = %send_err,
                    original = %reported.text,
                    "Failed to report error to chat"
                );
                TickOutcome::Failed {
                    kind,
                    reported: false,
                }
            }
        }
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reviewbot::error::PollError;
use reviewbot::port::Notifier;

/// Thread-safe message collector for notification assertions in tests.
///
/// Every send attempt is recorded, including attempts made while the
/// notifier is set to fail.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent sends fail with `DeliveryFailed`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock notifier messages").clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().expect("lock notifier messages").len()
    }

    pub fn count(&self, message: &str) -> usize {
        self.messages().iter().filter(|m| *m == message).count()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &str) -> Result<(), PollError> {
        self.messages
            .lock()
            .expect("lock notifier messages")
            .push(message.to_string());

        if self.failing.load(Ordering::SeqCst) {
            return Err(PollError::DeliveryFailed {
                destination: self.destination().to_string(),
                reason: "chat not found".to_string(),
            });
        }
        Ok(())
    }

    fn destination(&self) -> &str {
        "recording"
    }
}

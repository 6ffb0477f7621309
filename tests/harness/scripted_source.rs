use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reviewbot::error::PollError;
use reviewbot::port::ReviewSource;
use serde_json::Value;

/// Review source that replays a fixed script of responses and records the
/// `from_date` of every request.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    script: Arc<Mutex<VecDeque<Result<Value, PollError>>>>,
    requests: Arc<Mutex<Vec<i64>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, body: Value) -> &Self {
        self.script.lock().expect("lock script").push_back(Ok(body));
        self
    }

    pub fn push_err(&self, err: PollError) -> &Self {
        self.script.lock().expect("lock script").push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<i64> {
        self.requests.lock().expect("lock requests").clone()
    }
}

#[async_trait]
impl ReviewSource for ScriptedSource {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        self.requests.lock().expect("lock requests").push(from_date);
        self.script
            .lock()
            .expect("lock script")
            .pop_front()
            .expect("scripted source exhausted")
    }

    fn endpoint(&self) -> &str {
        "scripted"
    }
}

//! Canned backend for tests; never touches the network.

use super::{CompletionBackend, CompletionError, Message};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

pub type CallLog = Arc<Mutex<Vec<Vec<Message>>>>;

pub struct FakeBackend {
    outcome: Result<String, String>,
    calls: CallLog,
}

impl FakeBackend {
    pub fn answering(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            calls: CallLog::default(),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(reason.to_string()),
            calls: CallLog::default(),
        }
    }

    /// Handle to every conversation this backend has been sent.
    pub fn calls(&self) -> CallLog {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl CompletionBackend for FakeBackend {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.outcome.clone().map_err(CompletionError::Backend)
    }

    fn model_name(&self) -> &str {
        "fake"
    }
}

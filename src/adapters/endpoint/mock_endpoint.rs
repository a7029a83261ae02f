//! Mock Chat Endpoint for testing.
//!
//! Provides a configurable implementation of the ChatEndpoint port so the
//! relay and the session client can be exercised without a network.
//!
//! # Features
//!
//! - Pre-configured replies consumed in order
//! - Error injection for fallback testing
//! - Simulated latency for single-flight testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let endpoint = MockChatEndpoint::new()
//!     .with_reply("Paris is lovely in spring.")
//!     .with_delay(Duration::from_millis(100));
//!
//! let reply = endpoint.send("Where should I go?").await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ChatEndpoint, EndpointError};

/// Reply used once the scripted queue is exhausted.
pub const DEFAULT_MOCK_REPLY: &str = "Mock reply";

/// A scripted outcome.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text.
    Reply(String),
    /// Fail with this error.
    Error(EndpointError),
}

/// Mock chat endpoint.
#[derive(Debug, Clone, Default)]
pub struct MockChatEndpoint {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockChatEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.push(MockReply::Reply(text.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: EndpointError) -> Self {
        self.push(MockReply::Error(error));
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Messages received, in order.
    pub fn calls(&self) -> Vec<String> {
        self.lock_calls().clone()
    }

    fn push(&self, reply: MockReply) {
        self.replies
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(reply);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| MockReply::Reply(DEFAULT_MOCK_REPLY.to_string()))
    }
}

#[async_trait]
impl ChatEndpoint for MockChatEndpoint {
    async fn send(&self, message: &str) -> Result<String, EndpointError> {
        self.lock_calls().push(message.to_string());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_reply() {
            MockReply::Reply(text) => Ok(text),
            MockReply::Error(err) => Err(err),
        }
    }
}

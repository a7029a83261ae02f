//! Chat Endpoint Port - Interface for any `{message}` → `{response}` hop.
//!
//! Both network boundaries in the system speak the same wire shape:
//! the session client posts to the relay, and the relay posts to the
//! external travel backend. One port models both so each side can be
//! exercised against a scripted fake.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoEndpoint;
//!
//! #[async_trait]
//! impl ChatEndpoint for EchoEndpoint {
//!     async fn send(&self, message: &str) -> Result<String, EndpointError> {
//!         Ok(message.to_string())
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for a single chat round trip.
///
/// Implementations either return the reply text or an [`EndpointError`];
/// callers decide how a failure is presented.
#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    /// Sends one message and waits for the reply.
    async fn send(&self, message: &str) -> Result<String, EndpointError>;
}

/// Request body on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

impl ChatResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

/// Chat endpoint errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// Connection could not be made or was dropped.
    #[error("network error: {0}")]
    Network(String),

    /// No reply within the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Endpoint answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for operator logs only.
        body: String,
    },

    /// Reply body was not `{"response": <string>}`.
    #[error("parse error: {0}")]
    Parse(String),
}

impl EndpointError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// True for failures where the endpoint was never reached or never answered.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout { .. })
    }
}

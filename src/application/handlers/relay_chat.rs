//! RelayChat command handler.
//!
//! Forwards one traveller message to the travel backend and normalizes the
//! result. Failures of any kind collapse into a single fallback reply; the
//! underlying cause is logged and never leaves this handler.

use std::sync::Arc;
use tracing::{debug, error};

use crate::ports::{ChatEndpoint, EndpointError};

/// Reply sent to the client when the backend cannot be used.
pub const RELAY_FALLBACK_REPLY: &str =
    "Sorry, there was an error connecting to the travel assistant.";

/// Command to relay a message.
#[derive(Debug, Clone)]
pub struct RelayChatCommand {
    /// Correlates the relay's log lines for one request.
    pub request_id: String,
    /// The traveller's message, forwarded verbatim.
    pub message: String,
}

impl RelayChatCommand {
    pub fn new(request_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            message: message.into(),
        }
    }
}

/// Result of relaying one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The backend answered; this is its reply.
    Delivered(String),
    /// The backend failed; the client gets [`RELAY_FALLBACK_REPLY`].
    Fallback,
}

impl RelayOutcome {
    /// Text the client receives in the `response` field.
    pub fn response_text(&self) -> &str {
        match self {
            Self::Delivered(text) => text,
            Self::Fallback => RELAY_FALLBACK_REPLY,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }
}

/// Handler for relaying chat messages to the travel backend.
///
/// Stateless: each call is an independent turn with exactly one backend call.
pub struct RelayChatHandler {
    backend: Arc<dyn ChatEndpoint>,
}

impl RelayChatHandler {
    pub fn new(backend: Arc<dyn ChatEndpoint>) -> Self {
        Self { backend }
    }

    pub async fn handle(&self, cmd: RelayChatCommand) -> RelayOutcome {
        debug!(
            request_id = %cmd.request_id,
            message_len = cmd.message.len(),
            "Relaying message to travel backend"
        );

        match self.backend.send(&cmd.message).await {
            Ok(reply) => {
                debug!(request_id = %cmd.request_id, reply_len = reply.len(), "Backend replied");
                RelayOutcome::Delivered(reply)
            }
            Err(err) => {
                log_backend_failure(&cmd.request_id, &err);
                RelayOutcome::Fallback
            }
        }
    }
}

fn log_backend_failure(request_id: &str, err: &EndpointError) {
    error!(
        request_id = %request_id,
        unreachable = err.is_unreachable(),
        error = %err,
        "Backend error"
    );
}

//! Session client configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::validate_http_url;

/// How the chat client reaches the relay.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Relay chat endpoint
    #[serde(default = "default_relay_url")]
    pub relay_url: String,

    /// Request timeout in seconds; must exceed the relay's backend timeout
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate client configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_http_url(&self.relay_url, "client.relay_url")?;
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("client.timeout_secs"));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: default_relay_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_relay_url() -> String {
    "http://localhost:3000/api/chatbot".to_string()
}

fn default_timeout() -> u64 {
    60
}

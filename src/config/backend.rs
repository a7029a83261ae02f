//! Travel backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::validate_http_url;

/// Where the relay forwards messages.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the travel backend
    #[serde(default = "default_url")]
    pub url: String,

    /// Path of the chat endpoint on the backend
    #[serde(default = "default_chat_path")]
    pub chat_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Full chat endpoint URL, e.g. `http://localhost:8001/chat`.
    pub fn chat_url(&self) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            self.chat_path.trim_start_matches('/')
        )
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_http_url(&self.chat_url(), "backend.url")?;
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("backend.timeout_secs"));
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            chat_path: default_chat_path(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_chat_path() -> String {
    "/chat".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.chat_url(), "http://localhost:8001/chat");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chat_url_joins_slashes() {
        let config = BackendConfig {
            url: "https://travel.example.com/".to_string(),
            chat_path: "chat".to_string(),
            ..Default::default()
        };
        assert_eq!(config.chat_url(), "https://travel.example.com/chat");
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let config = BackendConfig {
            url: "ftp://localhost".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = BackendConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BackendConfig {
            timeout_secs: 500,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

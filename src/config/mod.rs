//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TRAVEL_ASSISTANT` prefix and nested values use double underscores as separators.
//!
//! Every value has a default, so an empty environment yields a relay on port 3000
//! forwarding to `http://localhost:8001/chat`.
//!
//! # Example
//!
//! ```no_run
//! use smart_travel_assistant::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Relaying to {}", config.backend.chat_url());
//! ```

mod backend;
mod client;
mod error;
mod server;

pub use backend::BackendConfig;
pub use client::ClientConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Relay server configuration (bind address, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// External travel backend the relay forwards to
    #[serde(default)]
    pub backend: BackendConfig,

    /// Terminal chat client settings
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TRAVEL_ASSISTANT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TRAVEL_ASSISTANT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TRAVEL_ASSISTANT__BACKEND__URL=...` -> `backend.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRAVEL_ASSISTANT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.backend.validate()?;
        self.client.validate()?;

        if self.client.timeout_secs <= self.backend.timeout_secs {
            return Err(ValidationError::ClientTimeoutTooShort {
                client_secs: self.client.timeout_secs,
                backend_secs: self.backend.timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

/// Accepts absolute `http`/`https` URLs only.
pub(crate) fn validate_http_url(value: &str, field: &'static str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidUrl {
        field,
        value: value.to_string(),
    };
    let url = reqwest::Url::parse(value).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(()),
        _ => Err(invalid()),
    }
}

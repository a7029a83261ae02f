//! Startup errors surfaced by the binaries.

use thiserror::Error;

use crate::config::{ConfigError, ValidationError};
use crate::ports::EndpointError;

/// Anything that stops a binary before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP client setup failed: {0}")]
    Endpoint(#[from] EndpointError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

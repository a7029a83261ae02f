//! HTTP Chat Endpoint - reqwest implementation of the ChatEndpoint port.
//!
//! Posts `{"message": ...}` as JSON and expects `{"response": ...}` back.
//! Used by the relay to reach the travel backend and by the session client
//! to reach the relay.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpEndpointConfig::new("http://localhost:8001/chat")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let endpoint = HttpChatEndpoint::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use crate::ports::{ChatEndpoint, ChatRequest, ChatResponse, EndpointError};

/// Configuration for an HTTP chat endpoint.
#[derive(Debug, Clone)]
pub struct HttpEndpointConfig {
    /// Full URL the message is posted to.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpEndpointConfig {
    /// Creates a configuration with a 30 second timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// JSON-over-HTTP chat endpoint.
#[derive(Debug, Clone)]
pub struct HttpChatEndpoint {
    config: HttpEndpointConfig,
    client: Client,
}

impl HttpChatEndpoint {
    /// Creates a new endpoint with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::Network` if the HTTP client cannot be built.
    pub fn new(config: HttpEndpointConfig) -> Result<Self, EndpointError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EndpointError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Returns the URL messages are posted to.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Sends the request, classifying transport failures.
    async fn post(&self, message: &str) -> Result<Response, EndpointError> {
        self.client
            .post(&self.config.url)
            .json(&ChatRequest::new(message))
            .send()
            .await
            .map_err(|e| self.classify(e))
    }

    /// Rejects non-success statuses, keeping the body for the operator log.
    async fn handle_response_status(&self, response: Response) -> Result<Response, EndpointError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(EndpointError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn parse_response(&self, response: Response) -> Result<String, EndpointError> {
        let response = self.handle_response_status(response).await?;

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    self.timeout_error()
                } else {
                    EndpointError::parse(format!("Failed to parse response: {}", e))
                }
            })?;

        Ok(body.response)
    }

    fn classify(&self, e: reqwest::Error) -> EndpointError {
        if e.is_timeout() {
            self.timeout_error()
        } else if e.is_connect() {
            EndpointError::network(format!("Connection failed: {}", e))
        } else {
            EndpointError::network(e.to_string())
        }
    }

    fn timeout_error(&self) -> EndpointError {
        EndpointError::Timeout {
            timeout_secs: self.config.timeout.as_secs(),
        }
    }
}

#[async_trait]
impl ChatEndpoint for HttpChatEndpoint {
    async fn send(&self, message: &str) -> Result<String, EndpointError> {
        let response = self.post(message).await?;
        self.parse_response(response).await
    }
}

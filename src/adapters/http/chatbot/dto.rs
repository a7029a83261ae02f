//! HTTP DTOs for the chatbot relay endpoint.
//!
//! These types decouple the HTTP API from the port wire types, allowing
//! independent evolution.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/chatbot`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatbotRequest {
    /// The traveller's message.
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of every `POST /api/chatbot` reply, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatbotResponse {
    /// Text to show as the assistant's message.
    pub response: String,
}

impl ChatbotResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_requires_message() {
        let result: Result<ChatbotRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn request_rejects_non_string_message() {
        let result: Result<ChatbotRequest, _> = serde_json::from_str(r#"{"message": 7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn response_serializes_single_field() {
        let json = serde_json::to_string(&ChatbotResponse::new("Paris is lovely in spring.")).unwrap();
        assert_eq!(json, r#"{"response":"Paris is lovely in spring."}"#);
    }

    #[test]
    fn health_reports_ok() {
        let json = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "smart-travel-assistant");
    }
}

//! HTTP handlers for the chatbot relay endpoint.
//!
//! These handlers connect Axum routes to the relay command handler. Every
//! reply, including failures, carries a `{"response": ...}` body the widget
//! can display directly.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::warn;
use uuid::Uuid;

use crate::application::handlers::{
    RelayChatCommand, RelayChatHandler, RelayOutcome, RELAY_FALLBACK_REPLY,
};

use super::dto::{ChatbotRequest, ChatbotResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for the relay handlers.
#[derive(Clone)]
pub struct ChatbotAppState {
    pub relay: Arc<RelayChatHandler>,
}

impl ChatbotAppState {
    pub fn new(relay: RelayChatHandler) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/chatbot
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/chatbot - Relay one message to the travel backend.
///
/// # Errors
/// - 400 Bad Request: body is not `{"message": <string>}`
/// - 500 Internal Server Error: the backend failed (fallback reply)
pub async fn post_chat(
    State(state): State<ChatbotAppState>,
    payload: Result<Json<ChatbotRequest>, JsonRejection>,
) -> Result<Json<ChatbotResponse>, ChatbotApiError> {
    let Json(request) = payload.map_err(|rejection| ChatbotApiError::BadRequest(rejection.body_text()))?;

    let request_id = format!("relay-{}", Uuid::new_v4());
    match state
        .relay
        .handle(RelayChatCommand::new(request_id, request.message))
        .await
    {
        RelayOutcome::Delivered(reply) => Ok(Json(ChatbotResponse::new(reply))),
        RelayOutcome::Fallback => Err(ChatbotApiError::BackendUnavailable),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// GET /api/health
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/health - Liveness probe. Does not contact the backend.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// ════════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════════

/// Relay endpoint failures. Both render the fixed fallback reply.
#[derive(Debug)]
pub enum ChatbotApiError {
    /// Request body was not `{"message": <string>}`.
    BadRequest(String),
    /// Backend unreachable or returned an unusable reply (already logged).
    BackendUnavailable,
}

impl IntoResponse for ChatbotApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ChatbotApiError::BadRequest(reason) => {
                warn!(%reason, "Malformed chatbot request");
                StatusCode::BAD_REQUEST
            }
            ChatbotApiError::BackendUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ChatbotResponse::new(RELAY_FALLBACK_REPLY))).into_response()
    }
}

//! Axum routes for the chatbot relay.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_health, post_chat, ChatbotAppState};

/// Creates routes for the relay endpoints.
///
/// - POST /chatbot - Relay a message to the travel backend
/// - GET /health - Liveness probe
pub fn chatbot_routes() -> Router<ChatbotAppState> {
    Router::new()
        .route("/chatbot", post(post_chat))
        .route("/health", get(get_health))
}

/// Combined router with all relay routes under /api.
pub fn chatbot_router() -> Router<ChatbotAppState> {
    Router::new().nest("/api", chatbot_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::endpoint::MockChatEndpoint;
    use crate::application::handlers::RelayChatHandler;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn chatbot_router_mounts_health_endpoint() {
        let state = ChatbotAppState::new(RelayChatHandler::new(Arc::new(MockChatEndpoint::new())));
        let app = chatbot_router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn chatbot_endpoint_rejects_get() {
        let state = ChatbotAppState::new(RelayChatHandler::new(Arc::new(MockChatEndpoint::new())));
        let app = chatbot_router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/chatbot")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

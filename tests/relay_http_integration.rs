//! Integration tests for the relay HTTP surface.
//!
//! These tests drive the assembled axum app in-process against a wiremock
//! stand-in for the travel backend:
//! 1. Backend replies are passed through with 200
//! 2. Backend failures become the fixed fallback with 500
//! 3. Malformed requests never reach the backend

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use smart_travel_assistant::adapters::{relay_app, ChatbotAppState, HttpChatEndpoint, HttpEndpointConfig};
use smart_travel_assistant::application::RelayChatHandler;

const FALLBACK: &str = "Sorry, there was an error connecting to the travel assistant.";

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_for_backend(chat_url: String) -> Router {
    let backend = HttpChatEndpoint::new(
        HttpEndpointConfig::new(chat_url).with_timeout(Duration::from_secs(2)),
    )
    .unwrap();
    let state = ChatbotAppState::new(RelayChatHandler::new(Arc::new(backend)));
    relay_app(state, &[])
}

async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chatbot")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn backend_reply_is_relayed_with_ok() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({"message": "When should I visit Paris?"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"response": "Paris is lovely in spring."})),
        )
        .expect(1)
        .mount(&backend)
        .await;

    let app = app_for_backend(format!("{}/chat", backend.uri()));
    let (status, body) = post_json(app, r#"{"message":"When should I visit Paris?"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Paris is lovely in spring."}));
}

#[tokio::test]
async fn unreachable_backend_returns_fallback_with_server_error() {
    // Nothing listens on the discard port.
    let app = app_for_backend("http://127.0.0.1:9/chat".to_string());
    let (status, body) = post_json(app, r#"{"message":"Hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"response": FALLBACK}));
}

#[tokio::test]
async fn backend_error_status_returns_fallback() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "validation error"})))
        .mount(&backend)
        .await;

    let app = app_for_backend(format!("{}/chat", backend.uri()));
    let (status, body) = post_json(app, r#"{"message":"Hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"response": FALLBACK}));
}

#[tokio::test]
async fn malformed_backend_payload_returns_fallback() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "wrong field"})))
        .mount(&backend)
        .await;

    let app = app_for_backend(format!("{}/chat", backend.uri()));
    let (status, body) = post_json(app, r#"{"message":"Hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"response": FALLBACK}));
}

#[tokio::test]
async fn malformed_requests_are_rejected_without_backend_call() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "unused"})))
        .expect(0)
        .mount(&backend)
        .await;

    for body in ["{}", r#"{"message": 42}"#, "not json"] {
        let app = app_for_backend(format!("{}/chat", backend.uri()));
        let (status, json_body) = post_json(app, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(json_body, json!({"response": FALLBACK}));
    }
}

#[tokio::test]
async fn health_endpoint_does_not_touch_backend() {
    let app = app_for_backend("http://127.0.0.1:9/chat".to_string());

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
async fn cors_preflight_allows_configured_origin() {
    let backend = HttpChatEndpoint::new(HttpEndpointConfig::new("http://127.0.0.1:9/chat")).unwrap();
    let state = ChatbotAppState::new(RelayChatHandler::new(Arc::new(backend)));
    let app = relay_app(state, &["http://localhost:3000".to_string()]);

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/chatbot")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
}

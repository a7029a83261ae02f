//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `endpoint` - Chat endpoint clients (HTTP, mock)
//! - `http` - The relay's axum surface

pub mod endpoint;
pub mod http;

pub use endpoint::{HttpChatEndpoint, HttpEndpointConfig, MockChatEndpoint};
pub use http::{relay_app, ChatbotAppState};

//! Chat Endpoint Adapters.
//!
//! Implementations of the ChatEndpoint port.
//!
//! ## Available Adapters
//!
//! - `HttpChatEndpoint` - JSON over HTTP via reqwest
//! - `MockChatEndpoint` - Scripted fake for testing

mod http_endpoint;
mod mock_endpoint;

pub use http_endpoint::{HttpChatEndpoint, HttpEndpointConfig};
pub use mock_endpoint::{MockChatEndpoint, MockReply, DEFAULT_MOCK_REPLY};

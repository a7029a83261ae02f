//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `ChatEndpoint` - one `{message}` → `{response}` round trip

mod chat_endpoint;

pub use chat_endpoint::{ChatEndpoint, ChatRequest, ChatResponse, EndpointError};

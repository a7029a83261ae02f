//! HTTP adapter for the chatbot relay endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ChatbotRequest, ChatbotResponse, HealthResponse};
pub use handlers::{ChatbotApiError, ChatbotAppState};
pub use routes::{chatbot_router, chatbot_routes};

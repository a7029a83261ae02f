//! Smart Travel Assistant relay server.
//!
//! Serves `POST /api/chatbot` and forwards each message to the configured
//! travel backend.

use std::sync::Arc;

use smart_travel_assistant::adapters::{relay_app, ChatbotAppState, HttpChatEndpoint, HttpEndpointConfig};
use smart_travel_assistant::application::RelayChatHandler;
use smart_travel_assistant::config::AppConfig;
use smart_travel_assistant::error::StartupError;
use smart_travel_assistant::telemetry::init_tracing;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server.log_level, config.server.log_format);
    config.validate()?;

    let backend_url = config.backend.chat_url();
    let backend = HttpChatEndpoint::new(
        HttpEndpointConfig::new(backend_url.clone()).with_timeout(config.backend.timeout()),
    )?;
    let state = ChatbotAppState::new(RelayChatHandler::new(Arc::new(backend)));
    let app = relay_app(state, &config.server.cors_origins_list());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        backend = %backend_url,
        timeout_secs = config.backend.timeout_secs,
        environment = ?config.server.environment,
        "Smart Travel Assistant relay listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}

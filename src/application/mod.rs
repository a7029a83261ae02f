//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports:
//! the relay side forwards one message per request, the session side drives
//! the client transcript.

pub mod handlers;

pub use handlers::{
    // Relay handlers
    RelayChatCommand, RelayChatHandler, RelayOutcome, RELAY_FALLBACK_REPLY,
    // Session handlers
    InputController, SendOutcome, SessionSnapshot, SubmitTrigger, CONNECTION_APOLOGY,
};

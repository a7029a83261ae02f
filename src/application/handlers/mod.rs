//! Application handlers.
//!
//! - `relay_chat` - server side: message in, backend reply or fallback out
//! - `send_message` - client side: input controller with single-flight sends

pub mod relay_chat;
pub mod send_message;

pub use relay_chat::{RelayChatCommand, RelayChatHandler, RelayOutcome, RELAY_FALLBACK_REPLY};
pub use send_message::{
    InputController, SendOutcome, SessionSnapshot, SubmitTrigger, CONNECTION_APOLOGY,
};

//! Domain layer containing the chat session types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects
//! - `chat` - Messages, the conversation store, and pending input

pub mod chat;
pub mod foundation;

//! Chat domain - the client-side session state.
//!
//! - `message` - `Message` and `Sender`
//! - `conversation` - append-only transcript with the busy flag
//! - `input` - pending text with the character cap

mod conversation;
mod input;
mod message;

pub use conversation::{ConversationStore, GREETING, SUGGESTED_QUESTIONS};
pub use input::PendingInput;
pub use message::{Message, MessageError, Sender, MAX_INPUT_CHARS};

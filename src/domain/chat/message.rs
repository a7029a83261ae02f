//! Message entity for the travel chat transcript.
//!
//! Messages are immutable records of one turn half: either the traveller's
//! question or the assistant's reply. They carry no identity beyond their
//! position in the transcript.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Timestamp;

/// Maximum characters a user may type into a single message.
pub const MAX_INPUT_CHARS: usize = 500;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The traveller typing into the widget.
    User,
    /// The travel assistant.
    Bot,
}

/// Errors raised when constructing a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("Message text cannot be empty")]
    Empty,

    #[error("Message text is {actual} characters, limit is {max}")]
    TooLong { max: usize, actual: usize },
}

/// An immutable chat message.
///
/// # Invariants
///
/// - `text` is non-blank
/// - user-authored `text` is at most [`MAX_INPUT_CHARS`] characters
/// - `timestamp` is the client-side creation time and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    text: String,
    timestamp: Timestamp,
}

impl Message {
    /// Creates a user message.
    ///
    /// # Errors
    ///
    /// - `Empty` if text is blank
    /// - `TooLong` if text exceeds [`MAX_INPUT_CHARS`]
    pub fn user(text: impl Into<String>) -> Result<Self, MessageError> {
        let text = text.into();
        Self::validate_non_blank(&text)?;

        let actual = text.chars().count();
        if actual > MAX_INPUT_CHARS {
            return Err(MessageError::TooLong {
                max: MAX_INPUT_CHARS,
                actual,
            });
        }

        Ok(Self::stamped(Sender::User, text))
    }

    /// Creates a bot message. Bot replies have no length limit.
    ///
    /// # Errors
    ///
    /// - `Empty` if text is blank
    pub fn bot(text: impl Into<String>) -> Result<Self, MessageError> {
        let text = text.into();
        Self::validate_non_blank(&text)?;
        Ok(Self::stamped(Sender::Bot, text))
    }

    /// Rebuilds a message from known-good parts (no validation).
    pub fn reconstitute(sender: Sender, text: String, timestamp: Timestamp) -> Self {
        Self {
            sender,
            text,
            timestamp,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn stamped(sender: Sender, text: String) -> Self {
        Self::reconstitute(sender, text, Timestamp::now())
    }

    fn validate_non_blank(text: &str) -> Result<(), MessageError> {
        if text.trim().is_empty() {
            return Err(MessageError::Empty);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod sender {
        use super::*;

        #[test]
        fn serializes_to_lowercase() {
            assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
            assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn user_creates_user_message() {
            let msg = Message::user("Best attractions in New York").unwrap();
            assert!(msg.is_user());
            assert!(!msg.is_bot());
            assert_eq!(msg.text(), "Best attractions in New York");
        }

        #[test]
        fn bot_creates_bot_message() {
            let msg = Message::bot("Try the Met.").unwrap();
            assert_eq!(msg.sender(), Sender::Bot);
        }

        #[test]
        fn rejects_whitespace_only_text() {
            assert_eq!(Message::user("  \n\t").unwrap_err(), MessageError::Empty);
            assert_eq!(Message::bot("").unwrap_err(), MessageError::Empty);
        }

        #[test]
        fn user_text_at_limit_is_accepted() {
            let text = "é".repeat(MAX_INPUT_CHARS);
            assert!(Message::user(text).is_ok());
        }

        #[test]
        fn user_text_over_limit_is_rejected() {
            let text = "a".repeat(MAX_INPUT_CHARS + 1);
            assert_eq!(
                Message::user(text).unwrap_err(),
                MessageError::TooLong {
                    max: MAX_INPUT_CHARS,
                    actual: MAX_INPUT_CHARS + 1
                }
            );
        }

        #[test]
        fn bot_text_is_unbounded() {
            let text = "a".repeat(MAX_INPUT_CHARS * 10);
            assert!(Message::bot(text).is_ok());
        }

        #[test]
        fn sets_timestamp_at_creation() {
            let before = Timestamp::now();
            let msg = Message::user("Hello").unwrap();
            assert!(!msg.timestamp().is_before(&before));
        }
    }
}

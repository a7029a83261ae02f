//! Pending input - the text the traveller is composing.
//!
//! The 500-character cap is enforced here, at the collection boundary:
//! anything typed past the limit is dropped, mirroring a `maxLength` field.

use super::message::MAX_INPUT_CHARS;

/// Text being composed, capped at [`MAX_INPUT_CHARS`] characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingInput {
    text: String,
}

impl PendingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pending text, truncating at the character cap.
    pub fn set(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.text = match text.char_indices().nth(MAX_INPUT_CHARS) {
            Some((cut, _)) => text[..cut].to_string(),
            None => text,
        };
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// The text without surrounding whitespace, or `None` if nothing is left.
    pub fn trimmed(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Character counter shown beside the input, e.g. `42/500`.
    pub fn counter(&self) -> String {
        format!("{}/{}", self.char_count(), MAX_INPUT_CHARS)
    }
}

//! Conversation store - the client session's transcript and busy flag.
//!
//! The transcript is append-only: insertion order is the conversation. The
//! store is owned by a single session and exposes only controlled mutation
//! (`append`, `set_busy`). Observers subscribe to a watch channel that
//! carries the transcript length after every append.

use tokio::sync::watch;

use super::message::{Message, Sender};
use crate::domain::foundation::Timestamp;

/// Greeting that seeds every new session.
pub const GREETING: &str = "👋 Hello! I'm your Smart Travel Assistant. I can help you with travel planning, destinations, weather information, and restaurant recommendations. How can I assist you today?";

/// Prompts offered before the traveller has said anything.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "What's the weather like in Tokyo?",
    "Find me restaurants in Paris",
    "Plan a 3-day trip to London",
    "Best attractions in New York",
];

/// Ordered message history plus the single in-flight flag.
#[derive(Debug)]
pub struct ConversationStore {
    messages: Vec<Message>,
    busy: bool,
    revision: watch::Sender<usize>,
}

impl ConversationStore {
    /// Creates a store seeded with the assistant greeting.
    pub fn new() -> Self {
        let greeting = Message::reconstitute(Sender::Bot, GREETING.to_string(), Timestamp::now());
        let (revision, _) = watch::channel(1);
        Self {
            messages: vec![greeting],
            busy: false,
            revision,
        }
    }

    /// Adds a message to the end of the transcript and notifies observers.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.revision.send_replace(self.messages.len());
    }

    /// Subscribes to transcript changes. The value is the current length.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.revision.subscribe()
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the greeting is present from construction.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Suggestions are shown until the first user turn.
    pub fn shows_suggestions(&self) -> bool {
        self.messages.len() <= 1
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_holds_only_the_greeting() {
        let store = ConversationStore::new();
        assert_eq!(store.len(), 1);
        assert!(store.messages()[0].is_bot());
        assert_eq!(store.messages()[0].text(), GREETING);
        assert!(!store.is_busy());
        assert!(store.shows_suggestions());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = ConversationStore::new();
        store.append(Message::user("Plan a 3-day trip to London").unwrap());
        store.append(Message::bot("Day 1: the British Museum.").unwrap());

        let texts: Vec<&str> = store.messages().iter().map(|m| m.text()).collect();
        assert_eq!(
            texts,
            vec![GREETING, "Plan a 3-day trip to London", "Day 1: the British Museum."]
        );
        assert!(!store.shows_suggestions());
    }

    #[test]
    fn append_notifies_subscribers() {
        let mut store = ConversationStore::new();
        let mut rx = store.subscribe();
        assert_eq!(*rx.borrow_and_update(), 1);

        store.append(Message::user("Hi").unwrap());

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 2);
    }

    #[test]
    fn busy_flag_toggles() {
        let mut store = ConversationStore::new();
        store.set_busy(true);
        assert!(store.is_busy());
        store.set_busy(false);
        assert!(!store.is_busy());
    }
}

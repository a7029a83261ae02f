//! SendMessage handler - the chat session's input controller.
//!
//! Mediates between raw input (typing, Enter, the send button) and the relay
//! call. At most one relay call is in flight per controller: while the busy
//! flag is set, further sends are rejected without touching the transcript.
//!
//! The session lock is never held across the relay await, and the busy flag
//! is cleared by a drop guard so every exit path (including cancellation)
//! releases it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::chat::{
    ConversationStore, Message, PendingInput, Sender, SUGGESTED_QUESTIONS,
};
use crate::domain::foundation::Timestamp;
use crate::ports::ChatEndpoint;

/// Bot message shown when the relay cannot produce a usable reply.
pub const CONNECTION_APOLOGY: &str =
    "❌ Sorry, I'm having trouble connecting to my servers. Please try again in a moment.";

/// What triggered a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// Enter pressed in the input. Shift+Enter never submits.
    EnterKey { shift: bool },
    /// Send button clicked.
    Button,
}

/// Result of a send action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing to send (blank input or non-submitting key).
    Ignored,
    /// A send was already in flight; nothing changed.
    Busy,
    /// The relay replied and the reply was appended.
    Replied,
    /// The relay failed and the apology was appended.
    Apologized,
}

/// Point-in-time copy of the session for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub messages: Vec<Message>,
    pub busy: bool,
    pub input: String,
    pub show_suggestions: bool,
}

#[derive(Debug, Default)]
struct Session {
    store: ConversationStore,
    input: PendingInput,
}

/// Input controller for one chat session.
pub struct InputController {
    session: Mutex<Session>,
    relay: Arc<dyn ChatEndpoint>,
}

impl InputController {
    /// Starts a new session (greeting only) that sends through `relay`.
    pub fn new(relay: Arc<dyn ChatEndpoint>) -> Self {
        Self {
            session: Mutex::new(Session::default()),
            relay,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input collection
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the pending text. Ignored while busy, when the input is disabled.
    pub fn set_input(&self, text: impl Into<String>) -> bool {
        let mut session = self.lock();
        if session.store.is_busy() {
            return false;
        }
        session.input.set(text);
        true
    }

    /// Copies a suggested question into the input.
    ///
    /// Only available before the first user turn.
    pub fn use_suggestion(&self, index: usize) -> bool {
        let mut session = self.lock();
        if session.store.is_busy() || !session.store.shows_suggestions() {
            return false;
        }
        match SUGGESTED_QUESTIONS.get(index) {
            Some(question) => {
                session.input.set(*question);
                true
            }
            None => false,
        }
    }

    /// Whether the send control is enabled.
    pub fn can_submit(&self) -> bool {
        let session = self.lock();
        !session.store.is_busy() && session.input.trimmed().is_some()
    }

    /// Routes a key press or click into [`send`](Self::send).
    pub async fn submit(&self, trigger: SubmitTrigger) -> SendOutcome {
        match trigger {
            SubmitTrigger::EnterKey { shift: true } => SendOutcome::Ignored,
            SubmitTrigger::EnterKey { shift: false } | SubmitTrigger::Button => self.send().await,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Send
    // ─────────────────────────────────────────────────────────────────────────

    /// Sends the pending text as one chat turn.
    pub async fn send(&self) -> SendOutcome {
        let text = match self.begin_turn() {
            Ok(text) => text,
            Err(outcome) => return outcome,
        };
        let _busy = BusyGuard {
            session: &self.session,
        };

        let reply = match self.relay.send(&text).await {
            Ok(reply) => Message::bot(reply).map_err(|e| e.to_string()),
            Err(err) => Err(err.to_string()),
        };

        let (message, outcome) = match reply {
            Ok(message) => (message, SendOutcome::Replied),
            Err(reason) => {
                debug!(%reason, "Relay call failed, showing apology");
                let apology =
                    Message::reconstitute(Sender::Bot, CONNECTION_APOLOGY.to_string(), Timestamp::now());
                (apology, SendOutcome::Apologized)
            }
        };

        self.lock().store.append(message);
        outcome
    }

    /// Appends the user message, clears the input and raises the busy flag.
    fn begin_turn(&self) -> Result<String, SendOutcome> {
        let mut session = self.lock();
        if session.store.is_busy() {
            return Err(SendOutcome::Busy);
        }

        let text = session
            .input
            .trimmed()
            .map(str::to_owned)
            .ok_or(SendOutcome::Ignored)?;

        let message = Message::user(text.clone()).map_err(|e| {
            warn!(error = %e, "Rejected pending input");
            SendOutcome::Ignored
        })?;

        session.store.append(message);
        session.input.clear();
        session.store.set_busy(true);
        Ok(text)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Observation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_busy(&self) -> bool {
        self.lock().store.is_busy()
    }

    pub fn input(&self) -> String {
        self.lock().input.as_str().to_string()
    }

    /// Character counter for the input, e.g. `12/500`.
    pub fn input_counter(&self) -> String {
        self.lock().input.counter()
    }

    pub fn message_count(&self) -> usize {
        self.lock().store.len()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let session = self.lock();
        SessionSnapshot {
            messages: session.store.messages().to_vec(),
            busy: session.store.is_busy(),
            input: session.input.as_str().to_string(),
            show_suggestions: session.store.shows_suggestions(),
        }
    }

    /// Subscribes to transcript appends.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.lock().store.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the busy flag when the in-flight send ends, however it ends.
struct BusyGuard<'a> {
    session: &'a Mutex<Session>,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .store
            .set_busy(false);
    }
}

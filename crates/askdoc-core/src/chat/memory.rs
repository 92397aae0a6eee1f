//! In-process session store.
//!
//! Histories live for the lifetime of the process only. A session id that
//! has never been written reads as an empty history.

use std::collections::HashMap;

use tracing::debug;

use askdoc_types::chat::{ChatHistory, SessionId, Turn};

static EMPTY_HISTORY: ChatHistory = ChatHistory::new();

/// Maps session ids to their ordered histories.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, ChatHistory>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// History of `session`, empty if unknown.
    pub fn history(&self, session: &SessionId) -> &ChatHistory {
        self.sessions.get(session).unwrap_or(&EMPTY_HISTORY)
    }

    /// Append a completed turn to `session`, creating it if needed.
    pub fn append(&mut self, session: &SessionId, turn: Turn) {
        let history = self.sessions.entry(session.clone()).or_default();
        history.push(turn);
        debug!(session = %session, turns = history.len(), "Appended turn to session");
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

//! Persistence for advisor conversations and plain-text export.

use std::sync::Arc;

use tracing::warn;

use pocketmint_domain::{ChatMessage, ChatSession};

use crate::{
    store::{self, KeyValueStore},
    CoreError,
};

const HISTORY_KEY: &str = "chat_histories";
/// Only the most recent conversations are kept.
const HISTORY_LIMIT: usize = 10;

/// Keeps recent advisor conversations in the shared store.
pub struct ChatHistoryService<S> {
    store: Arc<S>,
}

impl<S: KeyValueStore> ChatHistoryService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Stored conversations, most recent first.
    pub fn sessions(&self) -> Vec<ChatSession> {
        store::read_collection(self.store.as_ref(), HISTORY_KEY)
    }

    /// Upserts `session` at the head of the history and trims it to the
    /// retention limit. Write failures are logged and swallowed; history
    /// persistence must never interrupt a conversation.
    pub fn remember(&self, session: &ChatSession) {
        let mut sessions = self.sessions();
        sessions.retain(|stored| stored.id != session.id);
        sessions.insert(0, session.clone());
        sessions.truncate(HISTORY_LIMIT);
        if let Err(err) = store::write_collection(self.store.as_ref(), HISTORY_KEY, &sessions) {
            warn!(%err, "failed to persist chat history");
        }
    }

    /// Forgets every stored conversation.
    pub fn clear(&self) -> Result<(), CoreError> {
        self.store.remove(HISTORY_KEY)
    }
}

/// Renders a transcript as plain text, one entry per paragraph, for the
/// export feature. File handling stays with the caller.
pub fn export_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            format!(
                "{} ({}): {}",
                message.role.to_string().to_uppercase(),
                message.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
                message.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

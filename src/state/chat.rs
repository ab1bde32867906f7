//! Chat panel state: the message log, the draft, and sync status.
//!
//! DESIGN
//! ======
//! `send` is the single commit path. It sanitizes the draft, appends it,
//! clears the draft and writes the whole log through to storage before it
//! returns, so memory and storage match after every successful send.
//!
//! If the write fails the message stays in the log and is counted as
//! unsynced; the next full-log write (another send or `retry_sync`) clears
//! the count. Nothing committed in memory is ever rolled back.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::error::ChatError;
use crate::state::draft;
use crate::state::feed::FeedRows;
use crate::util::format::InlineFormat;
use crate::util::sanitize;
use crate::util::storage::{KeyValueStore, MessageLogStore};

/// Result of a send attempt that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// The draft was empty or whitespace-only.
    Ignored,
    /// The sanitized draft was appended at `index`.
    Committed { index: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    /// Sanitized plain-text messages in send order.
    pub messages: Vec<String>,
    /// Current unsent HTML fragment.
    pub draft: String,
    /// Trailing messages committed in memory but not confirmed in storage.
    pub unsynced: usize,
}

impl ChatState {
    /// Initial state for a freshly mounted panel, restored from `store`.
    pub fn restore<S: KeyValueStore>(store: &MessageLogStore<S>) -> Self {
        let messages = store.load();
        leptos::logging::log!("restored {} chat messages from {}", messages.len(), store.key());
        Self { messages, draft: String::new(), unsynced: 0 }
    }

    /// Replace the draft with the editor's current value.
    pub fn set_draft(&mut self, value: String) {
        self.draft = value;
    }

    /// Wrap the selected byte range of the draft (or all of it) in `format`.
    pub fn apply_format(&mut self, format: InlineFormat, selection: Option<std::ops::Range<usize>>) {
        self.draft = draft::apply_format(&self.draft, format, selection);
    }

    pub fn is_synced(&self) -> bool {
        self.unsynced == 0
    }

    /// Commit the draft to the log and write the log through to `store`.
    pub fn send<S: KeyValueStore>(&mut self, store: &mut MessageLogStore<S>) -> Result<SendOutcome, ChatError> {
        if self.draft.trim().is_empty() {
            return Ok(SendOutcome::Ignored);
        }

        let message = sanitize::plain_text(&self.draft);
        let index = self.messages.len();
        self.messages.push(message);
        self.draft.clear();

        match store.save(&self.messages) {
            Ok(()) => {
                self.unsynced = 0;
                leptos::logging::log!("chat message {index} committed");
                Ok(SendOutcome::Committed { index })
            }
            Err(e) => {
                self.unsynced += 1;
                leptos::logging::warn!("chat message {index} kept unsynced ({} pending): {e}", self.unsynced);
                Err(e.into())
            }
        }
    }

    /// Re-attempt the full-log write when messages are pending.
    pub fn retry_sync<S: KeyValueStore>(&mut self, store: &mut MessageLogStore<S>) -> Result<(), ChatError> {
        if self.is_synced() {
            return Ok(());
        }
        store.save(&self.messages)?;
        leptos::logging::log!("synced {} pending chat messages", self.unsynced);
        self.unsynced = 0;
        Ok(())
    }

    /// Display rows for the current log.
    pub fn rows(&self) -> FeedRows<'_> {
        FeedRows::new(&self.messages)
    }
}

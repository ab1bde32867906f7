//! Error types for storage, chat commits, and configuration.
//!
//! DESIGN
//! ======
//! Storage failures are the only fallible path in the send pipeline. They
//! are surfaced as values so the caller can keep the committed message in
//! memory and retry the write later.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors raised by a [`crate::util::storage::KeyValueStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No durable store is reachable (no window, storage disabled).
    #[error("storage unavailable")]
    Unavailable,

    /// Reading the key failed at the backend level.
    #[error("storage read failed: {0}")]
    Read(String),

    /// Writing the key failed (for example, quota exceeded).
    #[error("storage write failed for key {key}: {reason}")]
    Write { key: String, reason: String },

    /// The message log could not be encoded as JSON.
    #[error("message log encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors returned by chat state operations.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The message was committed in memory but could not be persisted.
    #[error("message log not persisted: {0}")]
    Storage(#[from] StorageError),
}

/// Errors raised while building [`crate::config::ChatConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The storage key override was present but blank.
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

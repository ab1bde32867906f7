//! Durable key/value storage for the message log.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` wraps `window.localStorage` under the `csr` feature and
//! is unavailable elsewhere. `MemoryStorage` is compiled for tests only.
//! `MessageLogStore` binds a backend to the fixed chat log key and
//! owns the JSON encoding of the log.
//!
//! TRADE-OFFS
//! ==========
//! Writes always replace the whole log. Two tabs writing the same key race
//! with last-write-wins semantics.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(test)]
use std::collections::HashMap;

use crate::error::StorageError;

/// Synchronous string key/value store.
pub trait KeyValueStore {
    /// Read `key`; `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
            Err(StorageError::Write { key: key.to_owned(), reason: "no browser storage".to_owned() })
        }
    }
}

/// In-process store. `fail_writes` simulates a full or read-only backend.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    pub fail_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries, fail_writes: false }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A backend bound to the chat log key.
#[derive(Clone, Debug)]
pub struct MessageLogStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> MessageLogStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    #[cfg(test)]
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Load the stored log. Absent, unreadable or malformed values load as empty.
    pub fn load(&self) -> Vec<String> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                leptos::logging::warn!("message log read failed: {e}");
                return Vec::new();
            }
        };
        match decode(&raw) {
            Ok(messages) => messages,
            Err(e) => {
                leptos::logging::warn!("message log under {} is corrupt, starting empty: {e}", self.key);
                Vec::new()
            }
        }
    }

    /// Replace the stored log with `messages`.
    pub fn save(&mut self, messages: &[String]) -> Result<(), StorageError> {
        let raw = encode(messages)?;
        self.backend.set(&self.key, &raw)
    }
}

/// Serialize the log as a JSON array of strings.
pub fn encode(messages: &[String]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(messages)?)
}

/// Parse a JSON array of strings.
pub fn decode(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(raw)
}

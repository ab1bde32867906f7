//! Chat panel configuration resolved from compile-time environment overrides.
//!
//! A browser build has no process environment, so overrides are captured with
//! `option_env!` when the crate is compiled and parsed by pure helpers.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_STORAGE_KEY: &str = "chatMessages";
pub const DEFAULT_PLACEHOLDER: &str = "Chat comes here...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// `localStorage` key holding the serialized message log.
    pub storage_key: String,
    /// Hint text shown in the empty draft editor.
    pub placeholder: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

impl ChatConfig {
    /// Build config from overrides captured at compile time.
    ///
    /// Optional:
    /// - `CHATPAD_STORAGE_KEY`: default `chatMessages`
    /// - `CHATPAD_PLACEHOLDER`: default `Chat comes here...`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            option_env!("CHATPAD_STORAGE_KEY"),
            option_env!("CHATPAD_PLACEHOLDER"),
        )
    }

    /// Build config from raw override values; `None` selects the default.
    pub fn from_parts(storage_key: Option<&str>, placeholder: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            storage_key: parse_storage_key(storage_key)?,
            placeholder: placeholder.unwrap_or(DEFAULT_PLACEHOLDER).to_owned(),
        })
    }
}

fn parse_storage_key(raw: Option<&str>) -> Result<String, ConfigError> {
    match raw {
        None => Ok(DEFAULT_STORAGE_KEY.to_owned()),
        Some(key) if key.trim().is_empty() => Err(ConfigError::EmptyStorageKey),
        Some(key) => Ok(key.trim().to_owned()),
    }
}

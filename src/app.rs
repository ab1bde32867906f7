//! Root application component and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_panel::ChatPanel;
use crate::config::ChatConfig;
use crate::state::chat::ChatState;
use crate::state::reactions::ReactionMenu;
use crate::util::storage::{BrowserStorage, MessageLogStore};

/// Resolve config, falling back to defaults when an override is invalid.
pub fn load_config() -> ChatConfig {
    ChatConfig::from_env().unwrap_or_else(|e| {
        leptos::logging::warn!("invalid chat config, using defaults: {e}");
        ChatConfig::default()
    })
}

/// Root application component.
///
/// Restores the message log once per mount and provides the shared state
/// contexts to the panel.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    let store = MessageLogStore::new(BrowserStorage, config.storage_key.clone());
    let chat = RwSignal::new(ChatState::restore(&store));
    let reactions = RwSignal::new(ReactionMenu::default());

    provide_context(config);
    provide_context(chat);
    provide_context(reactions);

    view! {
        <Title text="Chat"/>
        <ChatPanel/>
    }
}

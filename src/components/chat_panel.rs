//! Chat panel: message feed, draft editor, and composer bar.

use leptos::prelude::*;

use crate::components::composer_bar::ComposerBar;
use crate::components::draft_editor::DraftEditor;
use crate::components::message_feed::MessageFeed;
use crate::config::ChatConfig;
use crate::state::chat::{ChatState, SendOutcome};
use crate::util::storage::{BrowserStorage, MessageLogStore};

/// Chat panel wiring the send pipeline to browser storage.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<ChatConfig>();
    let sync_error = RwSignal::new(None::<String>);
    let scroll_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = scroll_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let send_key = config.storage_key.clone();
    let on_send = Callback::new(move |()| {
        let mut store = MessageLogStore::new(BrowserStorage, send_key.clone());
        let mut result = Ok(SendOutcome::Ignored);
        chat.update(|c| result = c.send(&mut store));
        match result {
            Ok(SendOutcome::Committed { .. }) => sync_error.set(None),
            Ok(SendOutcome::Ignored) => {}
            Err(e) => sync_error.set(Some(e.to_string())),
        }
    });

    let retry_key = config.storage_key.clone();
    let on_retry = move |_: leptos::ev::MouseEvent| {
        let mut store = MessageLogStore::new(BrowserStorage, retry_key.clone());
        let mut result = Ok(());
        chat.update(|c| result = c.retry_sync(&mut store));
        match result {
            Ok(()) => sync_error.set(None),
            Err(e) => {
                leptos::logging::warn!("chat sync retry failed: {e}");
                sync_error.set(Some(e.to_string()));
            }
        }
    };

    let unsynced_label = move || {
        let pending = chat.with(|c| c.unsynced);
        if pending == 1 { "1 message not saved".to_owned() } else { format!("{pending} messages not saved") }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__scroll" node_ref=scroll_ref>
                <MessageFeed/>
                <DraftEditor placeholder=config.placeholder.clone() on_send=on_send/>
            </div>

            <Show when=move || !chat.with(ChatState::is_synced)>
                <div class="chat-panel__sync-notice" title=move || sync_error.get().unwrap_or_default()>
                    <span>{unsynced_label}</span>
                    <button class="btn chat-panel__retry" on:click=on_retry.clone()>
                        "Retry"
                    </button>
                </div>
            </Show>

            <ComposerBar on_send=on_send/>
        </div>
    }
}

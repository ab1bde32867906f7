//! Read-only feed of sent messages.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Renders one row per log entry, alternating sides, newest at the bottom.
///
/// Scrolling belongs to the enclosing `chat-panel__scroll` container.
#[component]
pub fn MessageFeed() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <div class="message-feed">
            {move || {
                let rows: Vec<_> = chat.with(|c| c.rows().collect());
                if rows.is_empty() {
                    return view! {
                        <div class="message-feed__empty">"No messages yet"</div>
                    }
                        .into_any();
                }

                rows.into_iter()
                    .map(|row| {
                        view! {
                            <div
                                class=format!("message-feed__row {}", row.side.css_class())
                                inner_html=row.html
                            ></div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

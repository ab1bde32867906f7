//! Bottom bar: attach, reactions, mention, and send.

use leptos::prelude::*;

use crate::components::file_attach::FileAttach;
use crate::components::reaction_picker::ReactionPicker;
use crate::state::chat::ChatState;

#[component]
pub fn ComposerBar(on_send: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let can_send = move || chat.with(|c| !c.draft.trim().is_empty());

    view! {
        <div class="composer-bar">
            <FileAttach/>
            <ReactionPicker/>
            <button class="composer-bar__icon" title="Mention">"@"</button>
            <button
                class="btn btn--primary composer-bar__send"
                on:click=move |_| on_send.run(())
                disabled=move || !can_send()
            >
                "Send"
            </button>
        </div>
    }
}

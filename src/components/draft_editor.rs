//! Draft editor with a formatting toolbar and a sanitized live preview.

use std::ops::Range;

use leptos::html::Textarea;
use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::draft::submits_draft;
use crate::util::format::InlineFormat;
use crate::util::sanitize;

/// Byte range of the textarea selection within `draft`, if any.
fn selected_range(textarea_ref: NodeRef<Textarea>, draft: &str) -> Option<Range<usize>> {
    #[cfg(feature = "csr")]
    {
        let el = textarea_ref.get_untracked()?;
        let start = usize::try_from(el.selection_start().ok().flatten()?).ok()?;
        let end = usize::try_from(el.selection_end().ok().flatten()?).ok()?;
        Some(crate::state::draft::selection_to_bytes(draft, start, end))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (textarea_ref, draft);
        None
    }
}

#[component]
pub fn DraftEditor(placeholder: String, on_send: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let textarea_ref = NodeRef::<Textarea>::new();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if submits_draft(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            on_send.run(());
        }
    };

    let toolbar = InlineFormat::ALL
        .into_iter()
        .map(|format| {
            let on_click = move |_: leptos::ev::MouseEvent| {
                chat.update(|c| {
                    let selection = selected_range(textarea_ref, &c.draft);
                    c.apply_format(format, selection);
                });
            };
            view! {
                <button
                    class=format!("draft-editor__tool draft-editor__tool--{}", format.name())
                    title=format.name()
                    on:click=on_click
                >
                    {format.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let preview = move || chat.with(|c| sanitize::draft_preview(&c.draft));

    view! {
        <div class="draft-editor">
            <div class="draft-editor__toolbar">{toolbar}</div>
            <textarea
                class="draft-editor__input"
                node_ref=textarea_ref
                placeholder=placeholder
                prop:value=move || chat.with(|c| c.draft.clone())
                on:input=move |ev| chat.update(|c| c.set_draft(event_target_value(&ev)))
                on:keydown=on_keydown
            ></textarea>
            <div
                class="draft-editor__preview"
                class:draft-editor__preview--empty=move || chat.with(|c| c.draft.is_empty())
                inner_html=preview
            ></div>
        </div>
    }
}

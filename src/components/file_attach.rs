//! File-attach button backed by a hidden file input.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::util::attachment::{FileSelection, report_selection};

#[component]
pub fn FileAttach() -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_click = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                el.click();
            }
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                report_selection(&FileSelection::from_file(&file));
            }
            input.set_value("");
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    view! {
        <button class="composer-bar__icon" title="Attach file" on:click=on_click>
            "+"
        </button>
        <input class="file-attach__input" type="file" node_ref=input_ref on:change=on_change/>
    }
}

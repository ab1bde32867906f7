//! # chatpad
//!
//! Leptos + WASM chat panel: a formatted draft editor, a feed of sent
//! messages persisted to browser `localStorage`, a file-attach trigger and a
//! hover reaction picker.
//!
//! Messages are stripped to plain text before they enter the log and again
//! before they are rendered. Browser-only code sits behind the `csr` feature;
//! without it the crate builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point: install console hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(app::App);
}

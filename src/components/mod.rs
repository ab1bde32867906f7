//! Chat panel UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `ChatState` and `ReactionMenu`
//! signals provided by the root `App`.

pub mod chat_panel;
pub mod composer_bar;
pub mod draft_editor;
pub mod file_attach;
pub mod message_feed;
pub mod reaction_picker;

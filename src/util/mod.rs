//! Utility helpers shared across chat UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and HTML handling from component
//! logic so the message pipeline can be tested natively.

pub mod attachment;
pub mod format;
pub mod sanitize;
pub mod storage;

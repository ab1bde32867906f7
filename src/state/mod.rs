//! Chat panel state modules.
//!
//! DESIGN
//! ======
//! State is plain data with methods so the send pipeline can be tested
//! without a browser; components hold it in `RwSignal`s.

pub mod chat;
pub mod draft;
pub mod feed;
pub mod reactions;

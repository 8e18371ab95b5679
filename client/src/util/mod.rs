//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, window geometry, drag
//! data transfer) from page and component logic so the decisions around them
//! stay testable without a browser.

pub mod auth;
pub mod config;
pub mod dnd;
pub mod format;
pub mod window;

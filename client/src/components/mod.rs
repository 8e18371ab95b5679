//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render board chrome and viewport-aware surfaces while reading
//! shared state from Leptos context providers installed by `app::App`.

pub mod item_summary;
pub mod nav_bar;
pub mod status_column;
pub mod viewport_container;
pub mod viewport_debug;
pub mod work_item_card;

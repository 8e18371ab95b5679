//! Reactive state models shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each model is a plain struct wrapped in an `RwSignal` by the app root.
//! Transitions are methods on the struct so they can be tested without a
//! reactive runtime; pages only call them inside `update`.

pub mod board;
pub mod detail;
pub mod search;
pub mod viewport;

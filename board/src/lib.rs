//! Kanban board model and its reconciliation with the remote case service.
//!
//! The remote service is the system of record for work items ("cases").
//! This crate holds a read-through copy grouped by status, turns drops on the
//! board into typed status-change intents, and applies them remotely before
//! replacing the local board with a fresh fetch. Transport is abstracted by
//! the [`remote::Remote`] trait so the browser (`gloo-net`) and the CLI
//! (`reqwest`) share the same coordinator.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`item`] | Work item, status, priority and comment types (remote wire shape) |
//! | [`board`] | Status-partitioned [`Board`] derived from a fetched collection |
//! | [`drag`] | Drag payloads, drop validation, transient drag feedback |
//! | [`remote`] | Transport trait, endpoint paths, remote error decoding |
//! | [`error`] | [`LoadError`] and [`SyncError`] surfaced to the UI |
//! | [`sync`] | [`BoardSync`] coordinator: load, mutate, reconcile |
//! | [`search`] | Search filters for the case search endpoint |

pub mod board;
pub mod drag;
pub mod error;
pub mod item;
pub mod remote;
pub mod search;
pub mod sync;

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures;

pub use board::{Board, sort_by_status};
pub use drag::{DRAG_TYPE, DragFeedback, DragIntent, DragPayload, DropError, DropEvent, DropTarget};
pub use error::{LoadError, SyncError};
pub use item::{Comment, ItemId, Priority, Status, WorkItem};
pub use remote::{Remote, RemoteError};
pub use search::SearchQuery;
pub use sync::{BoardSync, LoadOutcome, update_item_status};

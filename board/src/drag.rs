//! Drag-and-drop protocol for the board.
//!
//! DESIGN
//! ======
//! A card's drag source carries a [`DragPayload`] serialized into the
//! browser's data transfer. A column's [`DropTarget`] decodes it, checks the
//! type tag, and resolves it against the current board into a typed
//! [`DropEvent`] before anything reaches the sync coordinator. The
//! `is_dragging` / `is_over` flags live in [`DragFeedback`] and never touch
//! the board.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::item::{ItemId, Status};

/// Type tag carried by every card payload; columns accept nothing else.
pub const DRAG_TYPE: &str = "servicefall";

/// Data-transfer format the payload is stored under.
pub const DRAG_FORMAT: &str = "application/x-servicefall+json";

/// What a card hands to the browser when a drag starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: ItemId,
}

/// Why a drop was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("drag payload is not readable: {0}")]
    Malformed(String),
    #[error("expected a `{DRAG_TYPE}` payload, got `{0}`")]
    ForeignType(String),
    #[error("case {0} is not on the board")]
    UnknownItem(ItemId),
}

impl DragPayload {
    #[must_use]
    pub fn new(id: ItemId) -> Self {
        Self { kind: DRAG_TYPE.to_owned(), id }
    }

    /// JSON text for the data transfer.
    #[must_use]
    pub fn encode(&self) -> String {
        serde_json::json!({ "type": self.kind, "id": self.id }).to_string()
    }

    /// Parse data-transfer text, rejecting payloads of another type.
    pub fn decode(raw: &str) -> Result<Self, DropError> {
        let payload: DragPayload =
            serde_json::from_str(raw).map_err(|e| DropError::Malformed(e.to_string()))?;
        if payload.kind != DRAG_TYPE {
            return Err(DropError::ForeignType(payload.kind));
        }
        Ok(payload)
    }
}

/// A validated drop: which item moves from which column to which.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropEvent {
    pub item_id: ItemId,
    pub from: Status,
    pub to: Status,
}

impl DropEvent {
    /// The status change this drop asks for, or `None` when dropped back
    /// onto its own column.
    #[must_use]
    pub fn intent(self) -> Option<DragIntent> {
        (self.from != self.to).then_some(DragIntent { item_id: self.item_id, target: self.to })
    }
}

/// A requested, not yet confirmed, status change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragIntent {
    pub item_id: ItemId,
    pub target: Status,
}

/// A status column accepting card drops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropTarget {
    pub status: Status,
}

impl DropTarget {
    #[must_use]
    pub fn new(status: Status) -> Self {
        Self { status }
    }

    /// Validate a decoded payload against `board`.
    pub fn resolve(&self, payload: &DragPayload, board: &Board) -> Result<DropEvent, DropError> {
        if payload.kind != DRAG_TYPE {
            return Err(DropError::ForeignType(payload.kind.clone()));
        }
        let from = board.status_of(payload.id).ok_or(DropError::UnknownItem(payload.id))?;
        Ok(DropEvent { item_id: payload.id, from, to: self.status })
    }

    /// Decode raw data-transfer text and resolve it to an intent.
    pub fn accept(&self, raw: &str, board: &Board) -> Result<Option<DragIntent>, DropError> {
        let payload = DragPayload::decode(raw)?;
        Ok(self.resolve(&payload, board)?.intent())
    }
}

/// Transient drag state for visual feedback only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragFeedback {
    dragging: Option<ItemId>,
    over: Option<Status>,
}

impl DragFeedback {
    pub fn start(&mut self, id: ItemId) {
        self.dragging = Some(id);
    }

    pub fn enter(&mut self, status: Status) {
        self.over = Some(status);
    }

    /// Clear the hover flag, unless the pointer already entered another column.
    pub fn leave(&mut self, status: Status) {
        if self.over == Some(status) {
            self.over = None;
        }
    }

    /// Drag finished (dropped or cancelled).
    pub fn end(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn dragging(&self) -> Option<ItemId> {
        self.dragging
    }

    #[must_use]
    pub fn is_dragging(&self, id: ItemId) -> bool {
        self.dragging == Some(id)
    }

    #[must_use]
    pub fn is_over(&self, status: Status) -> bool {
        self.over == Some(status)
    }
}

//! Board synchronization coordinator.
//!
//! DESIGN
//! ======
//! The remote service is authoritative. A status change is sent first and
//! the board is only replaced by a full re-fetch afterwards; nothing is
//! patched locally, so a failed change needs no rollback.
//!
//! ORDERING
//! ========
//! Loads may overlap (rapid repeated drops each trigger one). Every load
//! takes a ticket from a monotonically increasing counter and a response is
//! applied only if no later ticket has been applied already. An older fetch
//! that returns late is reported as [`LoadOutcome::Superseded`] and dropped.
//!
//! All methods take `&self` and never hold a borrow across an `.await`, so
//! several operations can be in flight on one event loop.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::cell::{Cell, RefCell};

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::drag::{DragIntent, DropError, DropTarget};
use crate::error::{LoadError, SyncError};
use crate::item::{Status, WorkItem};
use crate::remote::Remote;

/// What happened to a completed fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetch replaced the board.
    Applied { ticket: u64, items: usize },
    /// A later fetch was applied first; this one was discarded.
    Superseded { ticket: u64, current: u64 },
}

impl LoadOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, LoadOutcome::Applied { .. })
    }
}

/// Owns the local board and reconciles it with a [`Remote`].
pub struct BoardSync<R> {
    remote: R,
    board: RefCell<Board>,
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl<R: Remote> BoardSync<R> {
    #[must_use]
    pub fn new(remote: R) -> Self {
        Self {
            remote,
            board: RefCell::new(Board::default()),
            issued: Cell::new(0),
            applied: Cell::new(0),
        }
    }

    #[must_use]
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Snapshot of the board as last applied.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board.borrow().clone()
    }

    /// Ticket of the fetch currently shown (0 before the first load).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.applied.get()
    }

    /// Fetch the full collection and replace the board with it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] on transport, HTTP or decode failure; the
    /// previous board stays in place.
    pub async fn load_all(&self) -> Result<LoadOutcome, LoadError> {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        debug!(ticket, "board load started");

        let items = self.remote.fetch_all().await.map_err(|source| {
            warn!(ticket, error = %source, "board load failed");
            LoadError { source }
        })?;

        let current = self.applied.get();
        if ticket < current {
            debug!(ticket, current, "board load superseded");
            return Ok(LoadOutcome::Superseded { ticket, current });
        }

        let board = Board::from_items(items);
        let count = board.len();
        *self.board.borrow_mut() = board;
        self.applied.set(ticket);
        debug!(ticket, items = count, "board load applied");
        Ok(LoadOutcome::Applied { ticket, items: count })
    }

    /// Send a status change, then reconcile with a full fetch.
    ///
    /// # Errors
    ///
    /// [`SyncError::Rejected`] when the service refuses or cannot be reached
    /// (board untouched); [`SyncError::Reconcile`] when the change went
    /// through but the follow-up fetch failed.
    pub async fn apply_status_change(&self, intent: DragIntent) -> Result<LoadOutcome, SyncError> {
        info!(item = %intent.item_id, target = intent.target.as_wire(), "status change requested");
        self.remote
            .put_status(intent.item_id, intent.target)
            .await
            .map_err(|source| {
                warn!(item = %intent.item_id, error = %source, "status change rejected");
                SyncError::Rejected { item: intent.item_id, target: intent.target, source }
            })?;
        Ok(self.load_all().await?)
    }

    /// Resolve a drop of raw data-transfer text onto `status`'s column.
    ///
    /// # Errors
    ///
    /// Returns [`DropError`] for foreign or malformed payloads and for items
    /// no longer on the board.
    pub fn resolve_drop(&self, status: Status, raw: &str) -> Result<Option<DragIntent>, DropError> {
        DropTarget::new(status).accept(raw, &self.board.borrow())
    }
}

/// Change one item's status and return its refreshed state.
///
/// Detail views reconcile a single item rather than the whole board.
///
/// # Errors
///
/// Same split as [`BoardSync::apply_status_change`].
pub async fn update_item_status<R: Remote + ?Sized>(remote: &R, intent: DragIntent) -> Result<WorkItem, SyncError> {
    remote
        .put_status(intent.item_id, intent.target)
        .await
        .map_err(|source| SyncError::Rejected { item: intent.item_id, target: intent.target, source })?;
    let item = remote.fetch_one(intent.item_id).await.map_err(LoadError::from)?;
    Ok(item)
}

//! Kanban overview state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BoardSync` owns the authoritative local board; this struct is its
//! reactive mirror plus the UI-only bits (loading, pending changes, the last
//! error, drag feedback). Every completed operation copies the coordinator's
//! snapshot in, tagged with the generation it was applied at, and an older
//! generation never overwrites a newer one.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use board::{Board, DragFeedback, DropError, LoadError, LoadOutcome, SyncError};

/// Overview page state mirrored from the sync coordinator.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    /// Board as of `generation`.
    pub board: Board,
    /// Generation of `board` (0 = never loaded).
    pub generation: u64,
    /// A full fetch is in flight.
    pub loading: bool,
    /// Status changes sent but not yet reconciled.
    pub pending: usize,
    /// Last user-facing failure, cleared by the next action.
    pub error: Option<String>,
    /// Transient drag highlight flags.
    pub feedback: DragFeedback,
}

impl BoardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a finished `load_all`, adopting `snapshot` if it is newer.
    pub fn finish_load(&mut self, result: &Result<LoadOutcome, LoadError>, snapshot: Board, generation: u64) {
        self.loading = false;
        match result {
            Ok(_) => self.adopt(snapshot, generation),
            Err(err) => self.error = Some(err.user_message()),
        }
    }

    pub fn begin_change(&mut self) {
        self.pending += 1;
        self.error = None;
        self.feedback.end();
    }

    /// Record a finished `apply_status_change`.
    ///
    /// A reconcile failure still adopts the snapshot: the board is whatever
    /// the coordinator last applied, which may predate the change.
    pub fn finish_change(&mut self, result: &Result<LoadOutcome, SyncError>, snapshot: Board, generation: u64) {
        self.pending = self.pending.saturating_sub(1);
        if let Err(err) = result {
            self.error = Some(err.user_message());
        }
        self.adopt(snapshot, generation);
    }

    /// A drop that never reached the service. Only the highlight is reset.
    pub fn drop_refused(&mut self, err: &DropError) {
        log::debug!("drop refused: {err}");
        self.feedback.end();
    }

    pub fn is_busy(&self) -> bool {
        self.loading || self.pending > 0
    }

    fn adopt(&mut self, snapshot: Board, generation: u64) {
        if generation >= self.generation {
            self.board = snapshot;
            self.generation = generation;
        }
    }
}

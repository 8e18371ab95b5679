//! Case detail state.
//!
//! ORDERING
//! ========
//! Every route change bumps `seq` and clears the shown case, so nothing from
//! the previous id stays on screen or can be edited. Fetch and status-change
//! responses carry the `seq` they were started under and are dropped once it
//! is no longer current.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use board::{DragIntent, ItemId, RemoteError, Status, SyncError, WorkItem};

#[derive(Clone, Debug, Default)]
pub struct DetailState {
    pub item: Option<WorkItem>,
    pub error: Option<String>,
    /// A status change is in flight.
    pub saving: bool,
    seq: u64,
}

impl DetailState {
    /// Route now points at a (possibly new) case. Returns the fetch's `seq`.
    pub fn navigate(&mut self) -> u64 {
        self.reset();
        self.seq
    }

    /// Route id could not be parsed.
    pub fn invalid_route(&mut self) {
        self.reset();
        self.error = Some("Invalid case id".to_owned());
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn is_loading(&self) -> bool {
        self.item.is_none() && self.error.is_none()
    }

    /// Apply a fetch started under `seq`. Returns `false` when it was stale.
    pub fn finish_load(&mut self, seq: u64, result: Result<WorkItem, RemoteError>) -> bool {
        if seq != self.seq {
            return false;
        }
        match result {
            Ok(item) => {
                self.error = None;
                self.item = Some(item);
            }
            Err(err) => {
                self.item = None;
                self.error = Some(load_message(&err));
            }
        }
        true
    }

    /// Intent for moving the shown case to `target`, or `None` when nothing
    /// is loaded, a change is already in flight, or the status is unchanged.
    pub fn begin_change(&mut self, target: Status) -> Option<(u64, DragIntent)> {
        let item = self.item.as_ref()?;
        if self.saving || item.status == target {
            return None;
        }
        let intent = DragIntent { item_id: item.id, target };
        self.saving = true;
        self.error = None;
        Some((self.seq, intent))
    }

    /// Apply a status change started under `seq`. Returns `false` when the
    /// route moved on in the meantime.
    pub fn finish_change(&mut self, seq: u64, result: Result<WorkItem, SyncError>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.saving = false;
        match result {
            Ok(updated) if self.shown_id() == Some(updated.id) => self.item = Some(updated),
            Ok(_) => {}
            Err(err) => self.error = Some(err.user_message()),
        }
        true
    }

    fn shown_id(&self) -> Option<ItemId> {
        self.item.as_ref().map(|item| item.id)
    }

    fn reset(&mut self) {
        self.seq += 1;
        self.item = None;
        self.error = None;
        self.saving = false;
    }
}

/// User-facing message for a failed single-case fetch.
pub fn load_message(err: &RemoteError) -> String {
    match (err.status_code(), err.detail()) {
        (_, Some(detail)) => detail.to_owned(),
        (Some(404), None) => "Case not found".to_owned(),
        _ => "Failed to load case".to_owned(),
    }
}

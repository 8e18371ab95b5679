//! Status-grouped view of the fetched case collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `Board` is derived, never edited: the sync coordinator builds a new one
//! from every successful fetch and swaps it in whole. Within a column, items
//! keep the order the service returned them in.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::item::{ItemId, Status, WorkItem};

/// Work items partitioned into one column per [`Status`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    columns: [Vec<WorkItem>; 4],
}

impl Board {
    /// Group a fetched collection by status.
    #[must_use]
    pub fn from_items(items: Vec<WorkItem>) -> Self {
        let mut columns: [Vec<WorkItem>; 4] = Default::default();
        for item in items {
            columns[item.status.position()].push(item);
        }
        Self { columns }
    }

    /// Items currently in `status`'s column.
    #[must_use]
    pub fn column(&self, status: Status) -> &[WorkItem] {
        &self.columns[status.position()]
    }

    /// Columns in board order.
    pub fn columns(&self) -> impl Iterator<Item = (Status, &[WorkItem])> {
        Status::ALL.into_iter().map(|status| (status, self.column(status)))
    }

    /// All items, column by column.
    pub fn items(&self) -> impl Iterator<Item = &WorkItem> {
        self.columns.iter().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&WorkItem> {
        self.items().find(|item| item.id == id)
    }

    /// Column the item currently sits in.
    #[must_use]
    pub fn status_of(&self, id: ItemId) -> Option<Status> {
        self.get(id).map(|item| item.status)
    }
}

/// Stable sort by column order; used for flat "my cases" lists.
#[must_use]
pub fn sort_by_status(mut items: Vec<WorkItem>) -> Vec<WorkItem> {
    items.sort_by_key(|item| item.status.position());
    items
}

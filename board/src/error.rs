//! Errors surfaced to the user by board operations.
//!
//! Neither kind is fatal. Callers show [`LoadError::user_message`] /
//! [`SyncError::user_message`] and leave retrying to the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::item::{ItemId, Status};
use crate::remote::RemoteError;

/// The case collection could not be fetched or decoded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("loading cases failed: {source}")]
pub struct LoadError {
    #[source]
    pub source: RemoteError,
}

impl LoadError {
    #[must_use]
    pub fn user_message(&self) -> String {
        self.source
            .detail()
            .map_or_else(|| "Failed to load cases".to_owned(), str::to_owned)
    }
}

impl From<RemoteError> for LoadError {
    fn from(source: RemoteError) -> Self {
        Self { source }
    }
}

/// A status change was not applied, or its reconciliation fetch failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// The mutation itself failed; nothing changed locally.
    #[error("moving case {item} to {target} failed: {source}")]
    Rejected {
        item: ItemId,
        target: Status,
        #[source]
        source: RemoteError,
    },
    /// The mutation succeeded but the follow-up fetch did not.
    #[error("status changed, but refreshing failed: {0}")]
    Reconcile(#[from] LoadError),
}

impl SyncError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SyncError::Rejected { source, .. } => source
                .detail()
                .map_or_else(|| "Status change failed".to_owned(), str::to_owned),
            SyncError::Reconcile(load) => load.user_message(),
        }
    }
}

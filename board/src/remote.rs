//! Contract with the remote case service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call carries a bearer token supplied by the external identity
//! service. Implementations live next to their HTTP stack: `gloo-net` in the
//! browser client, `reqwest` in the CLI. Both map responses through
//! [`RemoteError::from_response`] so a `detail` field in an error body
//! reaches the user the same way.
//!
//! Single-threaded: futures are `?Send` so browser transports qualify.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::item::{ItemId, Status, WorkItem};
use crate::search::SearchQuery;

pub const ALL_PATH: &str = "/servicefall/alle";
pub const MINE_PATH: &str = "/servicefall/meine";
pub const SEARCH_PATH: &str = "/servicefall/suche";

#[must_use]
pub fn item_path(id: ItemId) -> String {
    format!("/servicefall/{id}")
}

#[must_use]
pub fn status_path(id: ItemId) -> String {
    format!("/servicefall/{id}/zustand")
}

/// `Authorization` header value for a token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Body of `PUT /servicefall/{id}/zustand`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub zustand: Status,
}

/// A failed round trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service answered HTTP {code}")]
    Status { code: u16, detail: Option<String> },
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Build the error for a non-success status from its raw body.
    #[must_use]
    pub fn from_response(code: u16, body: &str) -> Self {
        RemoteError::Status { code, detail: detail_message(body) }
    }

    /// Server-supplied message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            RemoteError::Status { detail, .. } => detail.as_deref(),
            RemoteError::Transport(_) | RemoteError::Decode(_) => None,
        }
    }

    /// HTTP status code, for status failures.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RemoteError::Status { code, .. } => Some(*code),
            RemoteError::Transport(_) | RemoteError::Decode(_) => None,
        }
    }
}

/// Extract a string `detail` field from a JSON error body.
///
/// Validation errors carry a structured `detail`; those yield `None` so the
/// caller falls back to its own message.
#[must_use]
pub fn detail_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    match value.get("detail") {
        Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => Some(detail.clone()),
        _ => None,
    }
}

/// HTTP operations the client needs from the case service.
#[async_trait(?Send)]
pub trait Remote {
    /// `GET /servicefall/alle`
    async fn fetch_all(&self) -> Result<Vec<WorkItem>, RemoteError>;

    /// `GET /servicefall/meine`: cases reported by the token's user.
    async fn fetch_mine(&self) -> Result<Vec<WorkItem>, RemoteError>;

    /// `GET /servicefall/{id}`
    async fn fetch_one(&self, id: ItemId) -> Result<WorkItem, RemoteError>;

    /// `GET /servicefall/suche` with the query's parameters.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<WorkItem>, RemoteError>;

    /// `PUT /servicefall/{id}/zustand`
    async fn put_status(&self, id: ItemId, status: Status) -> Result<(), RemoteError>;
}

//! Work item types in the remote service's wire shape.
//!
//! DESIGN
//! ======
//! Field and enum names are Rust-side; serde renames map them onto the
//! service's JSON (`titel`, `zustand`, `"In Bearbeitung"`, ...). An unknown
//! status or priority string fails decoding, so a fetched item always lands
//! in exactly one board column.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the remote service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

/// Workflow status. Declaration order is board column order.
///
/// Any status may move to any other; the client enforces no workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Offen")]
    Open,
    #[serde(rename = "In Bearbeitung")]
    InProgress,
    #[serde(rename = "Test")]
    Test,
    #[serde(rename = "Geschlossen")]
    Closed,
}

impl Status {
    /// Every status in column order.
    pub const ALL: [Status; 4] = [Status::Open, Status::InProgress, Status::Test, Status::Closed];

    /// Literal the remote service stores and accepts.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Status::Open => "Offen",
            Status::InProgress => "In Bearbeitung",
            Status::Test => "Test",
            Status::Closed => "Geschlossen",
        }
    }

    /// Snake-case identifier used on the command line and in CSS modifiers.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Test => "test",
            Status::Closed => "closed",
        }
    }

    /// Zero-based column index.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Status::Open => 0,
            Status::InProgress => 1,
            Status::Test => 2,
            Status::Closed => 3,
        }
    }

    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.as_wire() == raw)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Returned when text does not name any variant of the enum it was parsed as.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Status {
    type Err = UnknownVariant;

    /// Accepts the wire literal or the slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Status::ALL
            .into_iter()
            .find(|st| st.as_wire().eq_ignore_ascii_case(wanted) || st.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariant { kind: "status", value: s.to_owned() })
    }
}

/// Case priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Niedrig")]
    Low,
    #[serde(rename = "Mittel")]
    Medium,
    #[serde(rename = "Hoch")]
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Priority::Low => "Niedrig",
            Priority::Medium => "Mittel",
            Priority::High => "Hoch",
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for Priority {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Priority::ALL
            .into_iter()
            .find(|p| p.as_wire().eq_ignore_ascii_case(wanted) || p.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariant { kind: "priority", value: s.to_owned() })
    }
}

/// A comment attached to a case, oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: i64,
    pub text: String,
    /// Server timestamp as sent (ISO-8601, no zone).
    #[serde(rename = "erstellt_am", default)]
    pub created_at: String,
    #[serde(rename = "benutzer_id", default)]
    pub author_id: Option<i64>,
}

/// One case as returned by the remote service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: ItemId,
    #[serde(rename = "titel")]
    pub title: String,
    #[serde(rename = "beschreibung", default)]
    pub description: String,
    #[serde(rename = "prioritaet")]
    pub priority: Priority,
    #[serde(rename = "zustand")]
    pub status: Status,
    #[serde(rename = "erstellt_am", default)]
    pub created_at: String,
    /// Reporting user, when the service includes it.
    #[serde(rename = "benutzer_id", default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

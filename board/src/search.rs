//! Filters for the case search endpoint.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::item::{Priority, Status};

/// Free text plus optional status and priority filters.
///
/// Matching is done by the service; the client only builds parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub statuses: Vec<Status>,
    pub priorities: Vec<Priority>,
}

impl SearchQuery {
    /// No text and no filters: nothing to ask the service for.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.statuses.is_empty() && self.priorities.is_empty()
    }

    /// Query parameters in request order: `q`, then repeated `status`, then
    /// repeated `priority`.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let text = self.text.trim();
        if !text.is_empty() {
            pairs.push(("q", text.to_owned()));
        }
        pairs.extend(self.statuses.iter().map(|s| ("status", s.as_wire().to_owned())));
        pairs.extend(self.priorities.iter().map(|p| ("priority", p.as_wire().to_owned())));
        pairs
    }

    /// Add or remove a status filter, keeping column order.
    pub fn toggle_status(&mut self, status: Status) {
        if let Some(index) = self.statuses.iter().position(|s| *s == status) {
            self.statuses.remove(index);
        } else {
            self.statuses.push(status);
            self.statuses.sort();
        }
    }

    /// Add or remove a priority filter.
    pub fn toggle_priority(&mut self, priority: Priority) {
        if let Some(index) = self.priorities.iter().position(|p| *p == priority) {
            self.priorities.remove(index);
        } else {
            self.priorities.push(priority);
            self.priorities.sort();
        }
    }
}

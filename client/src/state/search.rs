//! Search screen state with debounced, sequence-checked requests.
//!
//! ORDERING
//! ========
//! Every edit bumps `seq`. A request is only started for the sequence that
//! is still current once the debounce delay has passed, and its response is
//! only applied if no edit happened in the meantime. Out-of-date responses
//! are dropped instead of cancelled.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use board::{Priority, RemoteError, SearchQuery, Status, WorkItem};

/// Delay between the last edit and the request, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub query: SearchQuery,
    pub results: Vec<WorkItem>,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl SearchState {
    pub fn set_text(&mut self, text: String) -> u64 {
        self.query.text = text;
        self.edited()
    }

    pub fn toggle_status(&mut self, status: Status) -> u64 {
        self.query.toggle_status(status);
        self.edited()
    }

    pub fn toggle_priority(&mut self, priority: Priority) -> u64 {
        self.query.toggle_priority(priority);
        self.edited()
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Query to send for `seq`, or `None` if it is stale or empty.
    pub fn begin(&mut self, seq: u64) -> Option<SearchQuery> {
        if seq != self.seq || self.query.is_empty() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.query.clone())
    }

    /// Apply a response for `seq`. Returns `false` when it was stale.
    pub fn finish(&mut self, seq: u64, result: Result<Vec<WorkItem>, RemoteError>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => self.results = items,
            Err(err) => {
                self.results.clear();
                self.error = Some(err.detail().map_or_else(|| "Search failed".to_owned(), str::to_owned));
            }
        }
        true
    }

    /// The "no results" hint: a finished, non-empty query that matched nothing.
    pub fn shows_no_results(&self) -> bool {
        !self.loading && self.error.is_none() && self.results.is_empty() && !self.query.is_empty()
    }

    fn edited(&mut self) -> u64 {
        self.seq += 1;
        if self.query.is_empty() {
            self.results.clear();
            self.loading = false;
            self.error = None;
        }
        self.seq
    }
}

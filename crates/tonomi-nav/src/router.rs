//! The router seam.
//!
//! The synchronizer needs two things from the host router: the current query
//! string and a way to replace it without adding a history entry.

use crate::error::NavError;

/// Host router capabilities used by the synchronizer.
pub trait Router {
    /// Current query string, without the leading `?`.
    fn current_query(&self) -> String;

    /// Replace the query string in place. Must not push a history entry.
    fn replace(&mut self, query: &str) -> Result<(), NavError>;
}

impl<R: Router + ?Sized> Router for Box<R> {
    fn current_query(&self) -> String {
        (**self).current_query()
    }

    fn replace(&mut self, query: &str) -> Result<(), NavError> {
        (**self).replace(query)
    }
}

/// In-memory router with a history stack.
///
/// `push`, `back` and `forward` model navigation the synchronizer did not
/// cause; `replace` records every write so tests can count them.
#[derive(Debug, Clone, Default)]
pub struct MemoryRouter {
    entries: Vec<String>,
    cursor: usize,
    replaced: Vec<String>,
    fail_replace: bool,
}

impl MemoryRouter {
    /// Start with an empty query.
    pub fn new() -> Self {
        Self::with_query("")
    }

    /// Start with a direct link.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            entries: vec![strip(query.into())],
            cursor: 0,
            replaced: Vec::new(),
            fail_replace: false,
        }
    }

    /// Follow a link: push a new entry and drop any forward entries.
    pub fn push(&mut self, query: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(strip(query.into()));
        self.cursor = self.entries.len() - 1;
    }

    /// Go back one entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Go forward one entry. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Make every following `replace` fail.
    pub fn set_fail_replace(&mut self, fail: bool) {
        self.fail_replace = fail;
    }

    /// Successful replace calls, oldest first.
    pub fn writes(&self) -> &[String] {
        &self.replaced
    }

    /// Number of history entries. `replace` never changes it.
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}

impl Router for MemoryRouter {
    fn current_query(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn replace(&mut self, query: &str) -> Result<(), NavError> {
        if self.fail_replace {
            return Err(NavError::ReplaceFailed(
                "history.replaceState is not allowed".to_string(),
            ));
        }
        let query = strip(query.to_string());
        self.entries[self.cursor] = query.clone();
        self.replaced.push(query);
        Ok(())
    }
}

fn strip(query: String) -> String {
    match query.strip_prefix('?') {
        Some(rest) => rest.to_string(),
        None => query,
    }
}

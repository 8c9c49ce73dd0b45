//! Browser history seam for URL synchronization.

/// The query-string half of the browser's navigable location.
///
/// Queries are passed without their leading `?`.
pub trait History {
    /// Query string of the current entry.
    fn current_query(&self) -> String;

    /// Overwrite the current entry's query string.
    fn replace_query(&mut self, query: &str);

    /// Add a new entry after the current one.
    fn push_query(&mut self, query: &str);
}

/// History kept in memory, for server rendering and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    /// Start with a single entry.
    pub fn new(initial_query: impl Into<String>) -> Self {
        let query = initial_query.into();
        Self {
            entries: vec![query.trim_start_matches('?').to_string()],
            index: 0,
        }
    }

    /// Every entry, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move to the previous entry; `false` at the start.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Move to the next entry; `false` at the end.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl History for MemoryHistory {
    fn current_query(&self) -> String {
        self.entries[self.index].clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.entries[self.index] = query.to_string();
    }

    fn push_query(&mut self, query: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(query.to_string());
        self.index += 1;
    }
}

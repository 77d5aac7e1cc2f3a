//! In-memory store of watch entries

use crate::entry::WatchEntry;
use parking_lot::RwLock;
use std::sync::Arc;

/// Append-only, insertion-ordered list of watch entries
///
/// Duplicate sources are allowed. Readers take a snapshot of the `Arc`s so a
/// poll cycle never holds the lock while copying, and appends made during a
/// cycle show up in the next one.
#[derive(Debug, Default)]
pub struct WatchStore {
    entries: RwLock<Vec<Arc<WatchEntry>>>,
}

impl WatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: WatchEntry) {
        self.entries.write().push(Arc::new(entry));
    }

    /// Append entries in order, returning how many were added
    pub fn extend(&self, entries: impl IntoIterator<Item = WatchEntry>) -> usize {
        let new_entries: Vec<_> = entries.into_iter().map(Arc::new).collect();
        let added = new_entries.len();
        self.entries.write().extend(new_entries);
        added
    }

    /// Current entries, in insertion order
    pub fn snapshot(&self) -> Vec<Arc<WatchEntry>> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

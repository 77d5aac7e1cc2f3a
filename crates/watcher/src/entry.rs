//! Watched files and their copy state

use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use watchlist::WatchSpec;

/// One file under observation
///
/// `last_copied_at` is `None` until the first successful copy, so "ever
/// copied" and "has a timestamp" cannot disagree. Only the poll cycle writes it.
#[derive(Debug)]
pub struct WatchEntry {
    source: PathBuf,
    destination: PathBuf,
    last_copied_at: Mutex<Option<SystemTime>>,
}

/// What the poll cycle should do with an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Never copied: copy regardless of mtime
    FirstObservation,
    /// Source mtime moved past the last copy
    Modified,
    Unchanged,
}

impl Change {
    pub fn needs_copy(self) -> bool {
        !matches!(self, Change::Unchanged)
    }
}

impl WatchEntry {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            last_copied_at: Mutex::new(None),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Source mtime recorded at the last successful copy
    pub fn last_copied_at(&self) -> Option<SystemTime> {
        *self.last_copied_at.lock()
    }

    pub fn ever_copied(&self) -> bool {
        self.last_copied_at().is_some()
    }

    /// File the source lands in: destination directory + source base name
    pub fn target_path(&self) -> Option<PathBuf> {
        self.source.file_name().map(|name| self.destination.join(name))
    }

    /// Classify the entry against the source's current mtime
    pub fn change(&self, mtime: SystemTime) -> Change {
        match self.last_copied_at() {
            // Copies on the first cycle even if the file was never edited after
            // it was added. Kept from the behavior this tool has always had;
            // probably a latent bug for a "copy on edit" watcher.
            None => Change::FirstObservation,
            Some(last) if mtime > last => Change::Modified,
            Some(_) => Change::Unchanged,
        }
    }

    pub(crate) fn record_copy(&self, mtime: SystemTime) {
        *self.last_copied_at.lock() = Some(mtime);
    }

    pub fn snapshot(&self) -> EntrySnapshot {
        EntrySnapshot {
            source: self.source.clone(),
            destination: self.destination.clone(),
            last_copied_at: self.last_copied_at(),
        }
    }
}

impl From<WatchSpec> for WatchEntry {
    fn from(spec: WatchSpec) -> Self {
        Self::new(spec.source, spec.destination)
    }
}

/// Point-in-time copy of an entry, for status output and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySnapshot {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub last_copied_at: Option<SystemTime>,
}

impl EntrySnapshot {
    pub fn ever_copied(&self) -> bool {
        self.last_copied_at.is_some()
    }
}

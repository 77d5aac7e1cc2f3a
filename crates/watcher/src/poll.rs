//! Poll cycle
//!
//! One pass over every watch entry: skip entries whose source is missing,
//! copy entries that were never copied or whose mtime moved past the last
//! copy, leave the rest alone. A failed copy never stops the pass.

use crate::copy::copy_entry;
use crate::entry::Change;
use crate::event::WatchEvent;
use crate::store::WatchStore;
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Tally of one poll cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub copied: usize,
    pub unchanged: usize,
    /// Entries skipped because the source was not present
    pub missing: usize,
    pub failed: usize,
}

impl CycleReport {
    pub fn scanned(&self) -> usize {
        self.copied + self.unchanged + self.missing + self.failed
    }
}

/// Run one poll cycle over a snapshot of the store
///
/// `on_event` receives one event per attempted copy, in store order.
pub fn poll_cycle(store: &WatchStore, mut on_event: impl FnMut(WatchEvent)) -> CycleReport {
    let mut report = CycleReport::default();

    for entry in store.snapshot() {
        let Some(mtime) = source_mtime(entry.source()) else {
            debug!("Skipping {}: source not present", entry.source().display());
            report.missing += 1;
            continue;
        };

        let change = entry.change(mtime);
        if !change.needs_copy() {
            report.unchanged += 1;
            continue;
        }

        match copy_entry(&entry) {
            Ok(target) => {
                info!("Copied {} -> {}", entry.source().display(), target.display());
                report.copied += 1;
                on_event(WatchEvent::Copied {
                    source: entry.source().to_path_buf(),
                    target,
                    first_copy: change == Change::FirstObservation,
                });
            }
            Err(e) => {
                warn!("{}", e);
                report.failed += 1;
                on_event(WatchEvent::CopyFailed {
                    source: entry.source().to_path_buf(),
                    message: e.to_string(),
                });
            }
        }
    }

    report
}

/// Modification time of a regular file, or `None` if it is not there
fn source_mtime(path: &Path) -> Option<SystemTime> {
    let metadata = fs::metadata(path).ok()?;
    if !metadata.is_file() {
        return None;
    }
    metadata.modified().ok()
}

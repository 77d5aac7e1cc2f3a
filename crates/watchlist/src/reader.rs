//! Loading watch lists from disk

use crate::{parse_watch_list, Result, WatchListError, WatchSpec};
use std::path::Path;

/// Source of watch-list batches
///
/// The watch engine loads batches through this trait so tests (and
/// alternative front-ends) can supply pairs without touching the disk.
pub trait WatchListReader {
    /// Read the watch list at `path` into source/destination pairs
    fn read_watch_list(&self, path: &Path) -> Result<Vec<WatchSpec>>;
}

/// Reads TOML watch lists from the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileWatchListReader;

impl WatchListReader for FileWatchListReader {
    fn read_watch_list(&self, path: &Path) -> Result<Vec<WatchSpec>> {
        let text = std::fs::read_to_string(path).map_err(|e| WatchListError::io(path, e))?;
        parse_watch_list(&text)
    }
}

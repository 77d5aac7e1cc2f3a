//! Copying a watched file into its destination

use crate::entry::WatchEntry;
use crate::error::{Result, WatchError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Copy the entry's source into its destination directory
///
/// Creates the destination directory if needed and overwrites any existing
/// file. On success the entry records the source mtime read after the copy;
/// on failure the entry is left untouched so the next cycle retries it.
pub fn copy_entry(entry: &WatchEntry) -> Result<PathBuf> {
    let target = entry.target_path().ok_or_else(|| {
        WatchError::copy(
            entry.source(),
            entry.destination(),
            io::Error::new(io::ErrorKind::InvalidInput, "source path has no file name"),
        )
    })?;

    fs::create_dir_all(entry.destination())
        .map_err(|e| WatchError::copy(entry.source(), &target, e))?;

    // fs::copy truncates the target before reading, which would empty the source
    if is_same_file(entry.source(), &target) {
        return Err(WatchError::copy(
            entry.source(),
            &target,
            io::Error::new(io::ErrorKind::InvalidInput, "source and target are the same file"),
        ));
    }

    fs::copy(entry.source(), &target).map_err(|e| WatchError::copy(entry.source(), &target, e))?;

    let mtime = fs::metadata(entry.source())
        .and_then(|metadata| metadata.modified())
        .map_err(|e| WatchError::copy(entry.source(), &target, e))?;

    entry.record_copy(mtime);
    Ok(target)
}

fn is_same_file(source: &Path, target: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(target)) {
        (Ok(source), Ok(target)) => source == target,
        _ => false,
    }
}

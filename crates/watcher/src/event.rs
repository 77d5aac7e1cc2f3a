//! Events published by the poll cycle

use std::path::PathBuf;

/// Outcome of a copy attempted during a poll cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// Source was copied into its destination directory
    Copied {
        source: PathBuf,
        target: PathBuf,
        /// True when this was the entry's first copy
        first_copy: bool,
    },
    /// Copy failed; the entry will be retried next cycle
    CopyFailed { source: PathBuf, message: String },
}

impl WatchEvent {
    /// Source path the event refers to
    pub fn source(&self) -> &std::path::Path {
        match self {
            WatchEvent::Copied { source, .. } | WatchEvent::CopyFailed { source, .. } => source,
        }
    }
}

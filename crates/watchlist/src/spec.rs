//! Source/destination pairs

use std::path::PathBuf;

/// One file to watch and the directory it gets copied into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchSpec {
    /// File being watched
    pub source: PathBuf,
    /// Directory the file is copied into
    pub destination: PathBuf,
}

impl WatchSpec {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

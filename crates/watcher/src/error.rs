//! Error types for the watch engine

use std::path::PathBuf;
use watchlist::WatchListError;

/// Result type for watch engine operations
pub type Result<T> = std::result::Result<T, WatchError>;

/// Errors surfaced by the watch engine
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("Source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Failed to load watch list {}: {source}", path.display())]
    BatchParse {
        path: PathBuf,
        #[source]
        source: WatchListError,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WatchError {
    pub fn copy(from: impl Into<PathBuf>, to: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Copy {
            from: from.into(),
            to: to.into(),
            source,
        }
    }
}

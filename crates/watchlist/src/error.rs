//! Error types for watch-list loading

use std::path::PathBuf;

/// Errors that can occur while reading or parsing a watch list
#[derive(Debug, thiserror::Error)]
pub enum WatchListError {
    #[error("Failed to read watch list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed watch list: {message}")]
    Parse { message: String },
}

impl WatchListError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

//! Watch-list documents for copywatch
//!
//! This crate provides:
//! - The `WatchSpec` pair handed to the watch engine
//! - A tolerant TOML watch-list parser (case-insensitive keys, bad entries skipped)
//! - The `WatchListReader` seam the engine loads batches through

pub mod error;
pub mod parse;
pub mod reader;
pub mod spec;

// Re-exports
pub use error::WatchListError;
pub use parse::parse_watch_list;
pub use reader::{FileWatchListReader, WatchListReader};
pub use spec::WatchSpec;

/// Result type for watch-list operations
pub type Result<T> = std::result::Result<T, WatchListError>;

//! Polling file watcher for copywatch
//!
//! This crate provides the watch engine:
//! - An append-only store of watched files and their copy state
//! - The copy operation (destination directory created on demand)
//! - The poll cycle and its first-copy / mtime change policy
//! - `FileWatcher`, which runs poll cycles on a background task until stopped

pub mod config;
pub mod copy;
pub mod engine;
pub mod entry;
pub mod error;
pub mod event;
pub mod poll;
pub mod store;

pub use config::WatcherConfig;
pub use copy::copy_entry;
pub use engine::{EngineStatus, FileWatcher};
pub use entry::{Change, EntrySnapshot, WatchEntry};
pub use error::{Result, WatchError};
pub use event::WatchEvent;
pub use poll::{poll_cycle, CycleReport};
pub use store::WatchStore;
pub use watchlist::WatchSpec;

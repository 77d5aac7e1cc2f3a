//! Watch engine
//!
//! Owns the entry store and drives poll cycles from a single background
//! task. `start` spawns the task; `stop` signals it and waits for it to exit,
//! letting a cycle that is already running finish first. Cycles from the
//! background task and from `poll_now` never overlap.

use crate::config::WatcherConfig;
use crate::entry::{EntrySnapshot, WatchEntry};
use crate::error::{Result, WatchError};
use crate::event::WatchEvent;
use crate::poll::{poll_cycle, CycleReport};
use crate::store::WatchStore;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use watchlist::{FileWatchListReader, WatchListReader, WatchSpec};

/// Lifecycle state reported by [`FileWatcher::status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Stopped,
    Running,
}

enum EngineState {
    Stopped,
    Running(PollTask),
    /// `stop` is waiting for the poll task to exit
    Stopping,
}

/// Handle to the background poll loop
struct PollTask {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Polls watched files and copies the ones that changed
pub struct FileWatcher {
    store: Arc<WatchStore>,
    reader: Box<dyn WatchListReader + Send + Sync>,
    config: WatcherConfig,
    events: broadcast::Sender<WatchEvent>,
    state: Mutex<EngineState>,
    /// Held for the duration of every poll cycle
    cycle_lock: Arc<Mutex<()>>,
}

impl FileWatcher {
    /// Create a stopped watcher that loads batches from disk
    pub fn new(config: WatcherConfig) -> Self {
        Self::with_reader(config, FileWatchListReader)
    }

    /// Create a stopped watcher that loads batches through `reader`
    pub fn with_reader<R>(config: WatcherConfig, reader: R) -> Self
    where
        R: WatchListReader + Send + Sync + 'static,
    {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));

        Self {
            store: Arc::new(WatchStore::new()),
            reader: Box::new(reader),
            config,
            events,
            state: Mutex::new(EngineState::Stopped),
            cycle_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Watch `source` and copy it into `destination` when it changes
    ///
    /// Fails if `source` is not an existing file right now. The destination
    /// is not checked; it is created on first copy.
    pub fn add_file_to_watch(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Result<()> {
        let source = source.as_ref();
        if !source.is_file() {
            return Err(WatchError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }

        self.store.push(WatchEntry::new(source, destination.as_ref()));
        debug!(
            "Watching {} -> {}",
            source.display(),
            destination.as_ref().display()
        );
        Ok(())
    }

    /// Load a watch list and add every entry in it
    ///
    /// Nothing is added if the list cannot be read or parsed. Returns the
    /// number of entries added, which may be zero.
    pub fn add_files_from_list(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let specs = self
            .reader
            .read_watch_list(path)
            .map_err(|source| WatchError::BatchParse {
                path: path.to_path_buf(),
                source,
            })?;

        let added = self.add_batch(specs);
        info!("Loaded {} watch entries from {}", added, path.display());
        Ok(added)
    }

    /// Append pairs verbatim; validating them is the caller's job
    pub fn add_batch(&self, specs: impl IntoIterator<Item = WatchSpec>) -> usize {
        self.store.extend(specs.into_iter().map(WatchEntry::from))
    }

    /// Start polling in the background
    ///
    /// Must be called from within a tokio runtime. Returns `false` without
    /// doing anything if the watcher is already running or still stopping.
    pub fn start(&self) -> bool {
        let mut state = self.state.lock();
        match *state {
            EngineState::Stopped => {}
            EngineState::Running(_) => {
                debug!("File watcher already running");
                return false;
            }
            EngineState::Stopping => {
                debug!("File watcher is still stopping");
                return false;
            }
        }

        let (shutdown, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(run_poll_loop(
            CycleContext {
                store: Arc::clone(&self.store),
                events: self.events.clone(),
                lock: Arc::clone(&self.cycle_lock),
            },
            self.config.poll_interval(),
            shutdown_rx,
        ));

        *state = EngineState::Running(PollTask { shutdown, handle });
        info!(
            "File watcher started ({} entries, interval: {:?})",
            self.store.len(),
            self.config.poll_interval()
        );
        true
    }

    /// Stop polling and wait for the background task to exit
    ///
    /// A cycle already in progress completes; no new cycle starts. The
    /// watcher reports `Running` until the task has exited. Returns `false`
    /// if the watcher was not running.
    pub async fn stop(&self) -> bool {
        let task = {
            let mut state = self.state.lock();
            match std::mem::replace(&mut *state, EngineState::Stopping) {
                EngineState::Running(task) => task,
                other => {
                    *state = other;
                    return false;
                }
            }
        };

        task.shutdown.send_replace(true);
        if let Err(e) = task.handle.await {
            warn!("Poll task ended abnormally: {}", e);
        }

        *self.state.lock() = EngineState::Stopped;
        info!("File watcher stopped");
        true
    }

    pub fn status(&self) -> EngineStatus {
        match *self.state.lock() {
            EngineState::Stopped => EngineStatus::Stopped,
            EngineState::Running(_) | EngineState::Stopping => EngineStatus::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status() == EngineStatus::Running
    }

    /// Receive copy events from every subsequent poll cycle
    pub fn subscribe(&self) -> broadcast::Receiver<WatchEvent> {
        self.events.subscribe()
    }

    /// Run a single poll cycle now
    ///
    /// Waits for a background cycle in progress to finish first, so an entry
    /// is never copied twice for the same change.
    pub async fn poll_now(&self) -> CycleReport {
        let cycle = CycleContext {
            store: Arc::clone(&self.store),
            events: self.events.clone(),
            lock: Arc::clone(&self.cycle_lock),
        };

        match tokio::task::spawn_blocking(move || cycle.run()).await {
            Ok(report) => report,
            Err(e) => {
                warn!("Poll cycle failed: {}", e);
                CycleReport::default()
            }
        }
    }

    /// Snapshot of all entries, in insertion order
    pub fn entries(&self) -> Vec<EntrySnapshot> {
        self.store.snapshot().iter().map(|e| e.snapshot()).collect()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.config
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        if let EngineState::Running(task) = std::mem::replace(self.state.get_mut(), EngineState::Stopped) {
            task.shutdown.send_replace(true);
        }
    }
}

/// Everything a poll cycle needs, cloneable onto the blocking pool
#[derive(Clone)]
struct CycleContext {
    store: Arc<WatchStore>,
    events: broadcast::Sender<WatchEvent>,
    lock: Arc<Mutex<()>>,
}

impl CycleContext {
    fn run(&self) -> CycleReport {
        let _cycle = self.lock.lock();
        // No subscribers is fine
        poll_cycle(&self.store, |event| {
            let _ = self.events.send(event);
        })
    }
}

/// Background loop: cycle, sleep, repeat until shutdown is signalled
async fn run_poll_loop(
    cycle: CycleContext,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    debug!("Poll loop running (interval: {:?})", interval);

    loop {
        if *shutdown.borrow() {
            break;
        }

        // Copies are blocking file I/O
        let this_cycle = cycle.clone();
        match tokio::task::spawn_blocking(move || this_cycle.run()).await {
            Ok(report) => debug!(
                "Poll cycle: {} copied, {} unchanged, {} missing, {} failed",
                report.copied, report.unchanged, report.missing, report.failed
            ),
            Err(e) => warn!("Poll cycle failed: {}", e),
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            changed = shutdown.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    debug!("Poll loop exited");
}

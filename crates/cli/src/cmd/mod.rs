//! CLI command implementations

pub mod config;
pub mod interactive;
pub mod watch;

use anyhow::{Context, Result};
use cli_lib::system_config::SystemConfig;
use owo_colors::OwoColorize;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::{broadcast, oneshot};
use tracing::warn;
use watcher::config::POLL_INTERVAL_RANGE_MS;
use watcher::{FileWatcher, WatchEvent};

/// Build a watcher from config, loading the configured startup watch list
pub fn build_watcher(config: &SystemConfig, interval_ms: Option<u64>) -> Result<FileWatcher> {
    let mut watcher_config = config.watcher.clone();
    if let Some(interval_ms) = interval_ms {
        anyhow::ensure!(
            POLL_INTERVAL_RANGE_MS.contains(&interval_ms),
            "--interval-ms must be between {} and {}",
            POLL_INTERVAL_RANGE_MS.start(),
            POLL_INTERVAL_RANGE_MS.end()
        );
        watcher_config.poll_interval_ms = interval_ms;
    }

    let watcher = FileWatcher::new(watcher_config);

    if let Some(list) = &config.startup.watch_list {
        let added = watcher
            .add_files_from_list(list)
            .context("Failed to load startup watch list")?;
        println!("Loaded {} files from {}", added, list.display());
    }

    Ok(watcher)
}

/// Start the watcher and keep it running until Ctrl+C
pub async fn run_until_ctrl_c(watcher: &FileWatcher) -> Result<()> {
    if watcher.is_empty() {
        warn!("No files are being watched yet");
    }

    let mut events = watcher.subscribe();
    let (stopped, mut stopped_rx) = oneshot::channel::<()>();
    let printer = tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;
                received = events.recv() => match received {
                    Ok(event) => print_event(&event),
                    Err(RecvError::Lagged(skipped)) => warn!("Dropped {} copy events", skipped),
                    Err(RecvError::Closed) => break,
                },
                _ = &mut stopped_rx => {
                    // Events from the final cycle are already queued
                    drain_events(&mut events);
                    break;
                }
            }
        }
    });

    watcher.start();
    println!(
        "Watching {} files every {:?}. Press Ctrl+C to stop.",
        watcher.len(),
        watcher.config().poll_interval()
    );

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")?;

    println!();
    println!("Stopping...");
    watcher.stop().await;
    let _ = stopped.send(());
    if let Err(e) = printer.await {
        warn!("Event printer ended abnormally: {}", e);
    }
    Ok(())
}

/// Print every event already queued on `events`; returns how many were printed
pub fn drain_events(events: &mut broadcast::Receiver<WatchEvent>) -> usize {
    let mut printed = 0;
    loop {
        match events.try_recv() {
            Ok(event) => {
                print_event(&event);
                printed += 1;
            }
            Err(TryRecvError::Lagged(skipped)) => warn!("Dropped {} copy events", skipped),
            Err(TryRecvError::Empty | TryRecvError::Closed) => return printed,
        }
    }
}

pub fn print_event(event: &WatchEvent) {
    match event {
        WatchEvent::Copied { source, target, .. } => {
            println!("{} {} -> {}", "✓".green(), source.display(), target.display());
        }
        WatchEvent::CopyFailed { message, .. } => {
            println!("{} {}", "✗".red(), message);
        }
    }
}

//! Interactive console, then watch until Ctrl+C

use anyhow::{Context, Result};
use cli_lib::interactive::{run_session, SessionEnd};
use cli_lib::system_config::SystemConfig;
use std::io;
use std::sync::Arc;

pub async fn run(config: &SystemConfig) -> Result<()> {
    let watcher = Arc::new(super::build_watcher(config, None)?);

    // Console reads block on stdin
    let session_watcher = Arc::clone(&watcher);
    let outcome = tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        run_session(&session_watcher, stdin.lock(), io::stdout())
    })
    .await
    .context("Interactive session panicked")??;

    match outcome {
        SessionEnd::Start => super::run_until_ctrl_c(&watcher).await,
        SessionEnd::EndOfInput => {
            println!();
            println!("Input closed before start; exiting");
            Ok(())
        }
    }
}

//! Watch files named on the command line

use anyhow::{Context, Result};
use cli_lib::system_config::SystemConfig;
use std::path::PathBuf;

/// Options for `cw watch`
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    /// Watch lists to load
    pub lists: Vec<PathBuf>,
    /// Source files, paired with `dests` by position
    pub files: Vec<PathBuf>,
    pub dests: Vec<PathBuf>,
    /// Run a single poll cycle and exit
    pub once: bool,
    /// Override the configured poll interval
    pub interval_ms: Option<u64>,
}

pub async fn run(config: &SystemConfig, options: WatchOptions) -> Result<()> {
    if options.files.len() != options.dests.len() {
        anyhow::bail!(
            "Each --file needs a matching --dest ({} files, {} destinations)",
            options.files.len(),
            options.dests.len()
        );
    }

    let watcher = super::build_watcher(config, options.interval_ms)?;

    for list in &options.lists {
        let added = watcher.add_files_from_list(list)?;
        println!("Added {} files from {}", added, list.display());
    }

    for (file, dest) in options.files.iter().zip(&options.dests) {
        watcher
            .add_file_to_watch(file, dest)
            .with_context(|| format!("Cannot watch {}", file.display()))?;
    }

    if watcher.is_empty() {
        anyhow::bail!("Nothing to watch: pass --list or --file/--dest, or set startup.watch_list");
    }

    if !options.once {
        return super::run_until_ctrl_c(&watcher).await;
    }

    let mut events = watcher.subscribe();
    let report = watcher.poll_now().await;
    super::drain_events(&mut events);

    println!(
        "{} copied, {} unchanged, {} missing, {} failed",
        report.copied, report.unchanged, report.missing, report.failed
    );

    if report.failed > 0 {
        anyhow::bail!("{} of {} watched files failed to copy", report.failed, report.scanned());
    }
    Ok(())
}

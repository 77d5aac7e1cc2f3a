//! Configuration management command
//!
//! Provides CLI interface to view and edit the copywatch configuration.

use anyhow::{Context, Result};
use cli_lib::system_config::{self, SystemConfig};
use owo_colors::OwoColorize;
use std::path::Path;

/// List all configuration values
pub fn run_list(config: &SystemConfig, config_path: &Path) -> Result<()> {
    println!("{}", "System Configuration".bold());
    println!("{}: {}\n", "Location".dimmed(), config_path.display().dimmed());

    println!("{}", "[watcher]".yellow());
    println!(
        "  {} = {} {}",
        "poll_interval_ms".cyan(),
        config.watcher.poll_interval_ms,
        format!("({:?})", config.watcher.poll_interval()).dimmed()
    );
    println!(
        "  {} = {}",
        "event_capacity".cyan(),
        config.watcher.event_capacity
    );

    println!("\n{}", "[startup]".yellow());
    println!(
        "  {} = {}",
        "watch_list".cyan(),
        match &config.startup.watch_list {
            Some(path) => path.display().to_string(),
            None => "(none)".dimmed().to_string(),
        }
    );

    println!("\n{}", "[logging]".yellow());
    println!("  {} = {}", "level".cyan(), config.logging.level);
    println!(
        "  {} = {}",
        "file".cyan(),
        match &config.logging.file {
            Some(path) => path.display().to_string(),
            None => "(stderr)".dimmed().to_string(),
        }
    );

    println!("\n{}", "Valid Ranges:".bold());
    println!("  poll_interval_ms: 10-3,600,000");
    println!("  event_capacity: 1-65,536");
    println!("  level: {}", system_config::LOG_LEVELS.join(", "));

    Ok(())
}

/// Get a single configuration value
pub fn run_get(config: &SystemConfig, key: &str) -> Result<()> {
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value
pub fn run_set(config: &SystemConfig, config_path: &Path, key: &str, value: &str) -> Result<()> {
    let mut config = config.clone();
    config.set(key, value)?;

    // Validate before saving
    config.validate().context("Invalid configuration value")?;

    system_config::save_to(&config, config_path)?;

    println!("{} {} = {}", "✓".green(), key.cyan(), value);
    println!(
        "{}",
        "Note: Restart cw for changes to take effect".yellow()
    );

    Ok(())
}

/// Show the config file path and optionally create it
pub fn run_path(config_path: &Path, create: bool) -> Result<()> {
    if create && system_config::init_if_missing(config_path)? {
        println!("{} Created config file at: {}", "✓".green(), config_path.display());
    } else if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{}", config_path.display());
        println!("{}", "File does not exist. Use --create to create it.".yellow());
    }

    Ok(())
}

/// Show example configuration
pub fn run_example() -> Result<()> {
    print!("{}", system_config::example_config());
    Ok(())
}

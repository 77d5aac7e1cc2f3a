//! System configuration file
//!
//! Stored as TOML at `--config`, `$COPYWATCH_CONFIG`, or
//! `<config dir>/copywatch/config.toml`. A missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use watcher::config::{EVENT_CAPACITY_RANGE, POLL_INTERVAL_RANGE_MS};
use watcher::WatcherConfig;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "COPYWATCH_CONFIG";

/// Accepted values for `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Every key understood by `get`/`set`
pub const KEYS: [&str; 5] = [
    "watcher.poll_interval_ms",
    "watcher.event_capacity",
    "startup.watch_list",
    "logging.level",
    "logging.file",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub watcher: WatcherConfig,

    #[serde(default)]
    pub startup: StartupConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What to load before the first command runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupConfig {
    /// Watch list added on every start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_list: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset (default: info)
    #[serde(default = "default_level")]
    pub level: String,

    /// Write logs to this file instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl SystemConfig {
    /// Check every value against its accepted range
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            POLL_INTERVAL_RANGE_MS.contains(&self.watcher.poll_interval_ms),
            "watcher.poll_interval_ms must be between {} and {} (got {})",
            POLL_INTERVAL_RANGE_MS.start(),
            POLL_INTERVAL_RANGE_MS.end(),
            self.watcher.poll_interval_ms
        );
        anyhow::ensure!(
            EVENT_CAPACITY_RANGE.contains(&self.watcher.event_capacity),
            "watcher.event_capacity must be between {} and {} (got {})",
            EVENT_CAPACITY_RANGE.start(),
            EVENT_CAPACITY_RANGE.end(),
            self.watcher.event_capacity
        );
        anyhow::ensure!(
            LOG_LEVELS.contains(&self.logging.level.as_str()),
            "logging.level must be one of {} (got '{}')",
            LOG_LEVELS.join(", "),
            self.logging.level
        );
        Ok(())
    }

    /// Read a single value by its dotted key
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "watcher.poll_interval_ms" => self.watcher.poll_interval_ms.to_string(),
            "watcher.event_capacity" => self.watcher.event_capacity.to_string(),
            "startup.watch_list" => display_optional(&self.startup.watch_list),
            "logging.level" => self.logging.level.clone(),
            "logging.file" => display_optional(&self.logging.file),
            _ => anyhow::bail!(
                "Unknown config key: {}. Use 'cw config --list' to see available keys.",
                key
            ),
        };
        Ok(value)
    }

    /// Set a single value by its dotted key
    ///
    /// An empty value clears optional paths. The result is not validated;
    /// call [`SystemConfig::validate`] before saving.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "watcher.poll_interval_ms" => {
                self.watcher.poll_interval_ms = value
                    .parse()
                    .context("Invalid value: must be a positive integer")?;
            }
            "watcher.event_capacity" => {
                self.watcher.event_capacity = value
                    .parse()
                    .context("Invalid value: must be a positive integer")?;
            }
            "startup.watch_list" => self.startup.watch_list = optional_path(value),
            "logging.level" => self.logging.level = value.trim().to_lowercase(),
            "logging.file" => self.logging.file = optional_path(value),
            _ => anyhow::bail!(
                "Unknown config key: {}. Use 'cw config --list' to see available keys.",
                key
            ),
        }
        Ok(())
    }
}

fn display_optional(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

fn optional_path(value: &str) -> Option<PathBuf> {
    let value = value.trim();
    (!value.is_empty()).then(|| PathBuf::from(value))
}

/// Default config file location: `$COPYWATCH_CONFIG`, then the user config dir
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("copywatch").join("config.toml"))
}

/// Config path to use, preferring an explicit `--config`
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => config_file_path().context("Could not determine config file path"),
    }
}

/// Load and validate the config at `path`; a missing file yields defaults
pub fn load_from(path: &Path) -> Result<SystemConfig> {
    if !path.exists() {
        return Ok(SystemConfig::default());
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: SystemConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    Ok(config)
}

/// Write the config to `path`, creating parent directories
pub fn save_to(config: &SystemConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let text = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

/// Write a default config if none exists; returns true if one was created
pub fn init_if_missing(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_to(&SystemConfig::default(), path)?;
    Ok(true)
}

/// Annotated example configuration
pub fn example_config() -> &'static str {
    r#"# copywatch configuration

[watcher]
# Delay between poll cycles, in milliseconds (10-3600000)
poll_interval_ms = 1000
# Copy events buffered per subscriber (1-65536)
event_capacity = 256

[startup]
# Watch list loaded every time cw starts
# watch_list = "/home/me/.config/copywatch/watchlist.toml"

[logging]
# trace, debug, info, warn or error; RUST_LOG takes precedence
level = "info"
# Log to a file instead of stderr
# file = "/tmp/copywatch.log"
"#
}

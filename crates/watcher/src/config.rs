//! Watch engine configuration

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Accepted poll intervals, in milliseconds
pub const POLL_INTERVAL_RANGE_MS: RangeInclusive<u64> = 10..=3_600_000;

/// Accepted event channel capacities
pub const EVENT_CAPACITY_RANGE: RangeInclusive<usize> = 1..=65_536;

/// Configuration for the watch engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatcherConfig {
    /// Delay between poll cycles (default: 1000ms)
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Buffered events per subscriber before the oldest are dropped
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

impl WatcherConfig {
    /// Config with the given poll interval and default everything else
    pub fn with_poll_interval(interval: Duration) -> Self {
        Self {
            poll_interval_ms: u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
            ..Self::default()
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            event_capacity: default_event_capacity(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_event_capacity() -> usize {
    256
}

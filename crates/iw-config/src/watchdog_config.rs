use crate::{ConfigError, ConfigErrorResult, ShutdownFailurePolicy};

use std::time::Duration;

use serde::Deserialize;

// Watchdog constraints
pub const MIN_POLL_INTERVAL_SECS: u64 = 5;
pub const MAX_POLL_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

pub const MIN_IDLE_SHUTDOWN_SECS: u64 = 60;
pub const MAX_IDLE_SHUTDOWN_SECS: u64 = 86_400;
pub const DEFAULT_IDLE_SHUTDOWN_SECS: u64 = 600;

pub const MIN_CRASH_AFTER_FAILURES: u32 = 1;
pub const MAX_CRASH_AFTER_FAILURES: u32 = 100;
pub const DEFAULT_CRASH_AFTER_FAILURES: u32 = 2;

/// Idle-shutdown decision tunables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WatchdogConfig {
    /// Seconds between ticks
    pub poll_interval_secs: u64,
    /// Seconds with zero players before the host is powered off
    pub idle_shutdown_secs: u64,
    /// Consecutive failed probes already recorded before the next failure
    /// escalates to a "crashed" notice
    pub crash_after_failures: u32,
    pub shutdown_failure_policy: ShutdownFailurePolicy,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            idle_shutdown_secs: DEFAULT_IDLE_SHUTDOWN_SECS,
            crash_after_failures: DEFAULT_CRASH_AFTER_FAILURES,
            shutdown_failure_policy: ShutdownFailurePolicy::default(),
        }
    }
}

impl WatchdogConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn idle_shutdown(&self) -> Duration {
        Duration::from_secs(self.idle_shutdown_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.poll_interval_secs < MIN_POLL_INTERVAL_SECS
            || self.poll_interval_secs > MAX_POLL_INTERVAL_SECS
        {
            return Err(ConfigError::watchdog(format!(
                "watchdog.poll_interval_secs must be {}-{}, got {}",
                MIN_POLL_INTERVAL_SECS, MAX_POLL_INTERVAL_SECS, self.poll_interval_secs
            )));
        }

        if self.idle_shutdown_secs < MIN_IDLE_SHUTDOWN_SECS
            || self.idle_shutdown_secs > MAX_IDLE_SHUTDOWN_SECS
        {
            return Err(ConfigError::watchdog(format!(
                "watchdog.idle_shutdown_secs must be {}-{}, got {}",
                MIN_IDLE_SHUTDOWN_SECS, MAX_IDLE_SHUTDOWN_SECS, self.idle_shutdown_secs
            )));
        }

        // A threshold shorter than one poll could never produce the warning tick.
        if self.idle_shutdown_secs < self.poll_interval_secs {
            return Err(ConfigError::watchdog(format!(
                "watchdog.idle_shutdown_secs ({}) must not be shorter than watchdog.poll_interval_secs ({})",
                self.idle_shutdown_secs, self.poll_interval_secs
            )));
        }

        if self.crash_after_failures < MIN_CRASH_AFTER_FAILURES
            || self.crash_after_failures > MAX_CRASH_AFTER_FAILURES
        {
            return Err(ConfigError::watchdog(format!(
                "watchdog.crash_after_failures must be {}-{}, got {}",
                MIN_CRASH_AFTER_FAILURES, MAX_CRASH_AFTER_FAILURES, self.crash_after_failures
            )));
        }

        Ok(())
    }
}

use crate::ShutdownFailurePolicy;

use std::time::Duration;

use iw_config::WatchdogConfig;

/// Decision tunables used by the engine.
#[derive(Debug, Clone)]
pub struct WatchdogSettings {
    /// Idle time before the power-off fires
    pub idle_threshold: Duration,
    /// Already-recorded consecutive failures needed before the next failure
    /// is reported as a crash
    pub crash_after_failures: u32,
    pub shutdown_failure_policy: ShutdownFailurePolicy,
}

impl Default for WatchdogSettings {
    fn default() -> Self {
        Self::from(&WatchdogConfig::default())
    }
}

impl From<&WatchdogConfig> for WatchdogSettings {
    fn from(config: &WatchdogConfig) -> Self {
        Self {
            idle_threshold: config.idle_shutdown(),
            crash_after_failures: config.crash_after_failures,
            shutdown_failure_policy: config.shutdown_failure_policy,
        }
    }
}

use chrono::{DateTime, Utc};

/// Mutable record carried between ticks.
///
/// Invariants kept by the engine:
/// - `notified_idle` and `shutdown_notified` are only true while `idle_since` is set
/// - `consecutive_unreachable` is zeroed by the first successful probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchdogState {
    /// First tick of the current idle episode
    pub idle_since: Option<DateTime<Utc>>,
    /// Idle warning already sent for this episode
    pub notified_idle: bool,
    /// Shutdown notice already sent for this episode
    pub shutdown_notified: bool,
    /// No reachable probe since process start or the last shutdown/crash
    pub is_fresh_start: bool,
    pub consecutive_unreachable: u32,
}

impl Default for WatchdogState {
    fn default() -> Self {
        Self {
            idle_since: None,
            notified_idle: false,
            shutdown_notified: false,
            is_fresh_start: true,
            consecutive_unreachable: 0,
        }
    }
}

impl WatchdogState {
    /// Restore the fresh-start state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// End the current idle episode.
    pub fn clear_idle(&mut self) {
        self.idle_since = None;
        self.notified_idle = false;
        self.shutdown_notified = false;
    }

    pub fn is_idle(&self) -> bool {
        self.idle_since.is_some()
    }
}

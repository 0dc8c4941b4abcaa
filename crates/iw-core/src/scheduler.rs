use crate::{StopListener, TickReport, WatchdogEngine, WatchdogResult, WatchdogState};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;

/// Result of asking for a tick.
#[derive(Debug)]
pub enum TickAttempt {
    Completed(TickReport),
    /// Another tick was still in flight
    Skipped,
}

/// Shared access to the engine. Ticks never overlap: a tick requested while
/// another one runs is skipped, not queued.
#[derive(Clone)]
pub struct WatchdogHandle {
    engine: Arc<Mutex<WatchdogEngine>>,
}

impl WatchdogHandle {
    pub fn new(engine: WatchdogEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    pub async fn try_tick(&self) -> WatchdogResult<TickAttempt> {
        let Ok(mut engine) = self.engine.try_lock() else {
            return Ok(TickAttempt::Skipped);
        };

        engine.tick().await.map(TickAttempt::Completed)
    }

    /// Reset to a fresh start once the in-flight tick (if any) finished.
    pub async fn reset(&self) {
        self.engine.lock().await.reset();
    }

    pub async fn snapshot(&self) -> WatchdogState {
        self.engine.lock().await.state().clone()
    }
}

/// Drives the engine on a fixed cadence until stopped.
pub struct WatchdogScheduler {
    handle: WatchdogHandle,
    poll_interval: Duration,
}

impl WatchdogScheduler {
    pub fn new(engine: WatchdogEngine, poll_interval: Duration) -> Self {
        Self {
            handle: WatchdogHandle::new(engine),
            poll_interval,
        }
    }

    pub fn handle(&self) -> WatchdogHandle {
        self.handle.clone()
    }

    /// Tick immediately, then every `poll_interval`. Overrun intervals are
    /// skipped. Returns the first tick error, which means the watchdog is
    /// broken and must not keep running silently.
    pub async fn run(self, mut stop: StopListener) -> WatchdogResult<()> {
        info!(
            "Watchdog running, polling every {}s",
            self.poll_interval.as_secs()
        );

        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = stop.wait() => {
                    info!("Watchdog stopped");
                    return Ok(());
                }
                _ = interval.tick() => {}
            }

            match self.handle.try_tick().await {
                Ok(TickAttempt::Completed(report)) => {
                    debug!(
                        "Tick complete: {}, {} notice(s), shutdown {:?}",
                        report.probe,
                        report.notices.len(),
                        report.shutdown
                    );
                }
                Ok(TickAttempt::Skipped) => {
                    warn!("Previous tick still running, skipping this one");
                }
                Err(e) => {
                    error!("Watchdog tick failed: {}", e);
                    return Err(e);
                }
            }
        }
    }
}

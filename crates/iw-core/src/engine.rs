use crate::{
    Notice, Notifier, PowerController, ProbeResult, ServerProbe, ShutdownFailurePolicy,
    ShutdownOutcome, TickReport, WatchdogResult, WatchdogSettings, WatchdogState,
};

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

const SECS_PER_MINUTE: u64 = 60;

/// Idle-shutdown state machine.
///
/// Owns the only [`WatchdogState`] for one monitored server. Ticks take
/// `&mut self`, so two ticks can never run against the same state at once.
pub struct WatchdogEngine {
    settings: WatchdogSettings,
    state: WatchdogState,
    probe: Arc<dyn ServerProbe>,
    power: Arc<dyn PowerController>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl WatchdogEngine {
    pub fn new(
        settings: WatchdogSettings,
        probe: Arc<dyn ServerProbe>,
        power: Arc<dyn PowerController>,
    ) -> Self {
        Self {
            settings,
            state: WatchdogState::default(),
            probe,
            power,
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Start from a given state instead of a fresh start.
    pub fn with_state(mut self, state: WatchdogState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &WatchdogState {
        &self.state
    }

    pub fn settings(&self) -> &WatchdogSettings {
        &self.settings
    }

    /// Forget all history, e.g. after the host was restarted out of band.
    pub fn reset(&mut self) {
        info!("Watchdog state reset");
        self.state.reset();
    }

    /// Run one tick at the current wall-clock time.
    pub async fn tick(&mut self) -> WatchdogResult<TickReport> {
        self.tick_at(Utc::now()).await
    }

    /// Run one tick as if the current time were `now`.
    pub async fn tick_at(&mut self, now: DateTime<Utc>) -> WatchdogResult<TickReport> {
        let probe = self.probe.probe().await?;
        debug!("Tick at {}: {}", now, probe);

        let mut report = TickReport::new(now, probe);

        match probe {
            ProbeResult::PlayersOnline(players) => {
                self.on_reachable(now, players, &mut report).await;
            }
            ProbeResult::Unreachable => self.on_unreachable(&mut report).await,
        }

        Ok(report)
    }

    async fn on_reachable(&mut self, now: DateTime<Utc>, players: u32, report: &mut TickReport) {
        self.state.consecutive_unreachable = 0;

        if self.state.is_fresh_start {
            self.state.is_fresh_start = false;
            info!("Game server reachable ({} player(s) online)", players);
            self.emit(Notice::Reachable, report).await;
        }

        if players > 0 {
            if self.state.is_idle() {
                info!("{} player(s) joined, idle timer cancelled", players);
                self.state.clear_idle();
            }
            return;
        }

        let Some(idle_since) = self.state.idle_since else {
            info!("No players online, idle timer started");
            self.state.idle_since = Some(now);
            return;
        };

        let idle_for = elapsed(idle_since, now);

        if idle_for >= self.settings.idle_threshold {
            self.shut_down(idle_for, report).await;
        } else if !self.state.notified_idle {
            let remaining = self.settings.idle_threshold - idle_for;
            self.state.notified_idle = true;
            self.emit(
                Notice::IdleWarning {
                    minutes_left: minutes_ceil(remaining),
                },
                report,
            )
            .await;
        }
    }

    async fn shut_down(&mut self, idle_for: Duration, report: &mut TickReport) {
        warn!(
            "No players for {}s (threshold {}s), powering off",
            idle_for.as_secs(),
            self.settings.idle_threshold.as_secs()
        );

        if self.state.shutdown_notified {
            info!("Retrying power-off, shutdown notice already sent");
        } else {
            self.state.shutdown_notified = true;
            self.emit(
                Notice::IdleShutdown {
                    idle_minutes: idle_for.as_secs() / SECS_PER_MINUTE,
                },
                report,
            )
            .await;
        }

        let outcome = match self.power.power_off().await {
            Ok(()) => {
                info!("Power-off requested successfully");
                ShutdownOutcome::Succeeded
            }
            Err(e) => {
                error!("Power-off failed: {}", e);
                ShutdownOutcome::Failed(e.to_string())
            }
        };

        let reset = match (&outcome, self.settings.shutdown_failure_policy) {
            (ShutdownOutcome::Failed(_), ShutdownFailurePolicy::RearmOnFailure) => {
                warn!("Idle timer kept armed, power-off will be retried next tick");
                false
            }
            _ => true,
        };

        if reset {
            self.state.clear_idle();
            self.state.is_fresh_start = true;
        }

        report.shutdown = outcome;
    }

    async fn on_unreachable(&mut self, report: &mut TickReport) {
        // An outage invalidates the idle window.
        self.state.clear_idle();

        let failures = self.state.consecutive_unreachable;

        if failures >= self.settings.crash_after_failures && !self.state.is_fresh_start {
            warn!(
                "Game server unreachable for {} consecutive ticks",
                failures + 1
            );
            self.state.is_fresh_start = true;
            self.emit(Notice::Crashed, report).await;
        } else if failures == 0 && self.state.is_fresh_start {
            info!("Game server not reachable yet, assuming it is starting");
            self.emit(Notice::Starting, report).await;
        } else {
            debug!("Game server unreachable ({} previous failure(s))", failures);
        }

        self.state.consecutive_unreachable = failures.saturating_add(1);
    }

    /// Record the notice and deliver it. Delivery failures are logged only.
    async fn emit(&self, notice: Notice, report: &mut TickReport) {
        let text = notice.to_string();
        report.notices.push(notice);

        match &self.notifier {
            Some(notifier) => {
                if let Err(e) = notifier.notify(&text).await {
                    warn!("Failed to deliver notification '{}': {}", text, e);
                }
            }
            None => info!("Notice: {}", text),
        }
    }
}

/// Time since `since`, zero if the clock went backwards.
fn elapsed(since: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (now - since).to_std().unwrap_or(Duration::ZERO)
}

fn minutes_ceil(duration: Duration) -> u64 {
    duration.as_secs().div_ceil(SECS_PER_MINUTE).max(1)
}

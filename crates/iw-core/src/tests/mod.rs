
use crate::{
    ActionError, Notifier, PowerController, ProbeError, ProbeResult, ServerProbe,
    WatchdogEngine, WatchdogSettings, WatchdogState,
};

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

pub(crate) const THRESHOLD_SECS: u64 = 600;
pub(crate) const POLL_SECS: i64 = 60;

/// Fixed reference time so tests are deterministic
pub(crate) fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

pub(crate) fn at(secs: i64) -> DateTime<Utc> {
    t0() + chrono::TimeDelta::seconds(secs)
}

/// Probe that replays a script, then keeps returning the last entry
pub(crate) struct ScriptedProbe {
    script: Mutex<VecDeque<ProbeResult>>,
    last: Mutex<ProbeResult>,
    broken: bool,
}

impl ScriptedProbe {
    pub(crate) fn new(script: &[ProbeResult]) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.iter().copied().collect()),
            last: Mutex::new(ProbeResult::Unreachable),
            broken: false,
        })
    }

    pub(crate) fn always(result: ProbeResult) -> Arc<Self> {
        Self::new(&[result])
    }

    pub(crate) fn broken() -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(VecDeque::new()),
            last: Mutex::new(ProbeResult::Unreachable),
            broken: true,
        })
    }
}

#[async_trait]
impl ServerProbe for ScriptedProbe {
    async fn probe(&self) -> Result<ProbeResult, ProbeError> {
        if self.broken {
            return Err(ProbeError::internal("scripted failure"));
        }

        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            *last = next;
        }
        Ok(*last)
    }
}

#[derive(Default)]
pub(crate) struct RecordingPower {
    calls: AtomicU32,
    fail: bool,
}

impl RecordingPower {
    pub(crate) fn ok() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicU32::new(0),
            fail: true,
        })
    }

    pub(crate) fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PowerController for RecordingPower {
    async fn power_off(&self) -> Result<(), ActionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ActionError::new("power_off", "control plane returned 503"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingNotifier {
    pub(crate) fn ok() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub(crate) fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, text: &str) -> Result<(), ActionError> {
        self.sent.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(ActionError::new("notify", "chat API unavailable"));
        }
        Ok(())
    }
}

pub(crate) fn settings() -> WatchdogSettings {
    WatchdogSettings {
        idle_threshold: Duration::from_secs(THRESHOLD_SECS),
        ..WatchdogSettings::default()
    }
}

/// Engine wired to the given fakes, starting from `state`
pub(crate) fn engine_with(
    settings: WatchdogSettings,
    probe: Arc<ScriptedProbe>,
    power: Arc<RecordingPower>,
    notifier: Arc<RecordingNotifier>,
    state: WatchdogState,
) -> WatchdogEngine {
    WatchdogEngine::new(settings, probe, power)
        .with_notifier(notifier)
        .with_state(state)
}

/// Steady state: server seen before, no idle episode, no failures
pub(crate) fn steady_state() -> WatchdogState {
    WatchdogState {
        is_fresh_start: false,
        ..WatchdogState::default()
    }
}

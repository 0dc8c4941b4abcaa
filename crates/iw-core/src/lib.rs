//! Idle-shutdown watchdog core.
//!
//! The engine is ticked on a fixed cadence. Each tick probes the game server
//! once, updates [`WatchdogState`], and may notify operators or power off the
//! host through the injected collaborators.

pub mod collaborators;
pub mod engine;
pub mod error;
pub mod notice;
pub mod probe_result;
pub mod scheduler;
pub mod settings;
pub mod stop_signal;
pub mod tick_report;
pub mod watchdog_state;

#[cfg(test)]
mod tests;

pub use collaborators::{Notifier, PowerController, ServerProbe};
pub use engine::WatchdogEngine;
pub use error::{ActionError, ProbeError, WatchdogError, WatchdogResult};
pub use notice::Notice;
pub use probe_result::ProbeResult;
pub use scheduler::{TickAttempt, WatchdogHandle, WatchdogScheduler};
pub use settings::WatchdogSettings;
pub use stop_signal::{StopListener, StopSignal};
pub use tick_report::{ShutdownOutcome, TickReport};
pub use watchdog_state::WatchdogState;

pub use iw_config::ShutdownFailurePolicy;

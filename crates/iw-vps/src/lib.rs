//! Client for the VPS provider's control plane and the power controller
//! the watchdog uses to stop an idle game host.

pub(crate) mod client;
pub(crate) mod dry_run;
pub(crate) mod error;
pub(crate) mod power_controller;
pub(crate) mod power_state;

pub use client::VpsClient;
pub use dry_run::DryRunPowerController;
pub use error::{VpsError, VpsResult};
pub use power_controller::VpsPowerController;
pub use power_state::{ActionState, PowerState};

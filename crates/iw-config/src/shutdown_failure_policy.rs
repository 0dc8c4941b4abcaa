use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// What the watchdog does with its idle state after a power-off attempt fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShutdownFailurePolicy {
    /// Reset idle state after every attempt, successful or not. A failed
    /// power-off is retried only after a complete new idle period.
    #[default]
    OptimisticReset,
    /// Reset only on success. On failure the idle episode stays armed and the
    /// next idle tick retries immediately.
    RearmOnFailure,
}

impl FromStr for ShutdownFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "optimistic_reset" => Ok(Self::OptimisticReset),
            "rearm_on_failure" => Ok(Self::RearmOnFailure),
            other => Err(format!("unknown shutdown failure policy '{other}'")),
        }
    }
}

impl fmt::Display for ShutdownFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptimisticReset => f.write_str("optimistic_reset"),
            Self::RearmOnFailure => f.write_str("rearm_on_failure"),
        }
    }
}

use crate::{Notice, ProbeResult};

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShutdownOutcome {
    #[default]
    NotAttempted,
    Succeeded,
    Failed(String),
}

/// What a single tick observed and did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub at: DateTime<Utc>,
    pub probe: ProbeResult,
    /// Notices in emission order, whether or not delivery succeeded
    pub notices: Vec<Notice>,
    pub shutdown: ShutdownOutcome,
}

impl TickReport {
    pub(crate) fn new(at: DateTime<Utc>, probe: ProbeResult) -> Self {
        Self {
            at,
            probe,
            notices: Vec::new(),
            shutdown: ShutdownOutcome::NotAttempted,
        }
    }

    pub fn shutdown_attempted(&self) -> bool {
        self.shutdown != ShutdownOutcome::NotAttempted
    }
}

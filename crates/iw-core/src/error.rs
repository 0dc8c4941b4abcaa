use std::fmt::Display;
use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// A probe defect. Network failures are never reported this way, they are
/// `ProbeResult::Unreachable`.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Invalid probe target {target}: {message} {location}")]
    InvalidTarget {
        target: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Probe internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ProbeError {
    #[track_caller]
    pub fn invalid_target<T: Into<String>, M: Into<String>>(target: T, message: M) -> Self {
        ProbeError::InvalidTarget {
            target: target.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<M: Into<String>>(message: M) -> Self {
        ProbeError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Failure of a side-effecting collaborator (power controller, notifier).
#[derive(Error, Debug)]
#[error("{action} failed: {message} {location}")]
pub struct ActionError {
    pub action: &'static str,
    pub message: String,
    pub location: ErrorLocation,
}

impl ActionError {
    #[track_caller]
    pub fn new<M: Into<String>>(action: &'static str, message: M) -> Self {
        ActionError {
            action,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap any displayable error from a client crate
    #[track_caller]
    pub fn from_error<E: Display>(action: &'static str, error: E) -> Self {
        Self::new(action, error.to_string())
    }
}

#[derive(Error, Debug)]
pub enum WatchdogError {
    #[error("Probe raised past its boundary: {source} {location}")]
    Probe {
        #[source]
        source: ProbeError,
        location: ErrorLocation,
    },
}

impl From<ProbeError> for WatchdogError {
    #[track_caller]
    fn from(source: ProbeError) -> Self {
        WatchdogError::Probe {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type WatchdogResult<T> = std::result::Result<T, WatchdogError>;

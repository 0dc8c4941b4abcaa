use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a status query did not produce a player count. The probe folds every
/// variant into `ProbeResult::Unreachable`.
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("{stage} timed out after {timeout_ms}ms {location}")]
    Timeout {
        stage: &'static str,
        timeout_ms: u128,
        location: ErrorLocation,
    },

    #[error("{stage} failed: {source} {location}")]
    Io {
        stage: &'static str,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("No address resolved for {target} {location}")]
    NoAddress {
        target: String,
        location: ErrorLocation,
    },

    #[error("Protocol error: {message} {location}")]
    Protocol {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid status JSON: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StatusError {
    #[track_caller]
    pub fn timeout(stage: &'static str, timeout: std::time::Duration) -> Self {
        StatusError::Timeout {
            stage,
            timeout_ms: timeout.as_millis(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(stage: &'static str, source: std::io::Error) -> Self {
        StatusError::Io {
            stage,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_address<S: Into<String>>(target: S) -> Self {
        StatusError::NoAddress {
            target: target.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn protocol<S: Into<String>>(message: S) -> Self {
        StatusError::Protocol {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StatusError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        StatusError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StatusResult<T> = std::result::Result<T, StatusError>;

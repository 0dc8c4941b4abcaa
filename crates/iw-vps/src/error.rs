use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors talking to the VPS control plane
#[derive(Error, Debug)]
pub enum VpsError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("VPS API returned {status}: {body} {location}")]
    Api {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("VPS client not configured: {message} {location}")]
    NotConfigured {
        message: String,
        location: ErrorLocation,
    },
}

impl VpsError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        VpsError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api<S: Into<String>>(status: u16, body: S) -> Self {
        VpsError::Api {
            status,
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_configured<S: Into<String>>(message: S) -> Self {
        VpsError::NotConfigured {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for VpsError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        VpsError::from_reqwest(err)
    }
}

pub type VpsResult<T> = std::result::Result<T, VpsError>;

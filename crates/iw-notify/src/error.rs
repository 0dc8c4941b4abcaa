use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Telegram rejected message ({status}): {description} {location}")]
    Rejected {
        status: u16,
        description: String,
        location: ErrorLocation,
    },

    #[error("Notifier not configured: {message} {location}")]
    NotConfigured {
        message: String,
        location: ErrorLocation,
    },
}

impl NotifyError {
    /// Convert reqwest error with context. The request URL embeds the bot
    /// token, so it is stripped.
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let err = err.without_url();
        NotifyError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn rejected<S: Into<String>>(status: u16, description: S) -> Self {
        NotifyError::Rejected {
            status,
            description: description.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_configured<S: Into<String>>(message: S) -> Self {
        NotifyError::NotConfigured {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for NotifyError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        NotifyError::from_reqwest(err)
    }
}

pub type NotifyResult<T> = std::result::Result<T, NotifyError>;

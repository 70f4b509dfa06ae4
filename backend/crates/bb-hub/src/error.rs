use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised while building a hub. Running hubs never fail.
#[derive(Error, Debug)]
pub enum HubError {
    #[error("Invalid hub configuration: {message} {location}")]
    InvalidConfig {
        message: String,
        location: ErrorLocation,
    },

    #[error("Bell relay needs a running Tokio runtime {location}")]
    NoRuntime { location: ErrorLocation },
}

impl HubError {
    #[track_caller]
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, HubError>;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid fleet: {message} {location}")]
    InvalidFleet {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid health state: {value} {location}")]
    InvalidHealthState {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid switch policy: {value} {location}")]
    InvalidSwitchPolicy {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_fleet<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidFleet {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

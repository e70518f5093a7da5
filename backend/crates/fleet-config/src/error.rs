use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::generic("Config", message)
    }

    /// Create a fleet (servers/bots) error
    #[track_caller]
    pub fn fleet<S: Into<String>>(message: S) -> Self {
        Self::generic("Fleet", message)
    }

    /// Create a monitoring error
    #[track_caller]
    pub fn monitoring<S: Into<String>>(message: S) -> Self {
        Self::generic("Monitoring", message)
    }

    /// Create a notification error
    #[track_caller]
    pub fn notification<S: Into<String>>(message: S) -> Self {
        Self::generic("Notification", message)
    }

    /// Create a server error
    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::generic("Server", message)
    }

    #[track_caller]
    fn generic<S: Into<String>>(category: &'static str, message: S) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<fleet_core::CoreError> for ConfigError {
    #[track_caller]
    fn from(e: fleet_core::CoreError) -> Self {
        ConfigError::fleet(e.to_string())
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;

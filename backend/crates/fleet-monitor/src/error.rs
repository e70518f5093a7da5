use std::panic::Location;

use error_location::ErrorLocation;
use fleet_config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Unknown server: {key} {location}")]
    UnknownServer {
        key: String,
        location: ErrorLocation,
    },

    #[error("Unknown bot: {bot_id} on server {server} {location}")]
    UnknownBot {
        server: String,
        bot_id: String,
        location: ErrorLocation,
    },

    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Notification failed: {message} {location}")]
    Notification {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl MonitorError {
    #[track_caller]
    pub fn unknown_server(key: impl Into<String>) -> Self {
        Self::UnknownServer {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_bot(server: impl Into<String>, bot_id: impl Into<String>) -> Self {
        Self::UnknownBot {
            server: server.into(),
            bot_id: bot_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn notification(message: impl Into<String>) -> Self {
        Self::Notification {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for errors caused by naming a server or bot that isn't configured.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownServer { .. } | Self::UnknownBot { .. })
    }
}

impl From<ConfigError> for MonitorError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MonitorError>;

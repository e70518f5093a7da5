//! REST API error types
//!
//! Every failure becomes `{"error": {"code", "message"}}` with a matching
//! HTTP status.

use fleet_monitor::MonitorError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code and message
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "AGENT_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown server or bot (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or malformed request fields (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// The agent rejected or failed the command (502)
    #[error("Agent error: {message} {location}")]
    Agent {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn agent(message: impl Into<String>) -> Self {
        Self::Agent {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, code, message) = match self {
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", message),
            ApiError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
            }
            ApiError::Agent { message, .. } => (StatusCode::BAD_GATEWAY, "AGENT_ERROR", message),
            ApiError::Internal { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
            }
        };

        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code: code.into(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert coordinator errors to API errors
impl From<MonitorError> for ApiError {
    #[track_caller]
    fn from(e: MonitorError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            MonitorError::UnknownServer { key, .. } => ApiError::NotFound {
                message: format!("Unknown server: {key}"),
                location,
            },
            MonitorError::UnknownBot { server, bot_id, .. } => ApiError::NotFound {
                message: format!("Unknown bot: {bot_id} on server {server}"),
                location,
            },
            other => ApiError::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

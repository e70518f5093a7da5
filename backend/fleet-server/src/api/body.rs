use crate::{ApiError, ApiResult};

use axum::body::Bytes;
use serde::de::DeserializeOwned;

/// Parse a JSON request body. An empty body yields `T::default()` so that
/// requests whose fields all have defaults may omit the body.
pub fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> ApiResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {e}")))
}

/// Unwrap a required request field
#[track_caller]
pub fn require(value: Option<String>, field: &str) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::bad_request(format!("Missing required field: {field}"))),
    }
}

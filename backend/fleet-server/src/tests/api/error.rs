use crate::ApiError;

use fleet_monitor::MonitorError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Unknown server: server9".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Unknown server: server9");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let response = ApiError::bad_request("Missing required field: server").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_agent_error_returns_502() {
    let response = ApiError::agent("Failed to start bot bot1 on server server1").into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "AGENT_ERROR");
    assert!(json["error"]["message"].as_str().unwrap().contains("bot1"));
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "boom".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_unknown_server_maps_to_not_found() {
    let error = ApiError::from(MonitorError::unknown_server("server9"));

    assert!(matches!(error, ApiError::NotFound { ref message, .. } if message.contains("server9")));
}

#[test]
fn test_unknown_bot_maps_to_not_found() {
    let error = ApiError::from(MonitorError::unknown_bot("server1", "bot9"));

    assert!(matches!(error, ApiError::NotFound { ref message, .. } if message.contains("bot9")));
}

#[test]
fn test_internal_monitor_error_maps_to_internal() {
    let error = ApiError::from(MonitorError::internal("client build failed"));

    assert!(matches!(error, ApiError::Internal { .. }));
}

use crate::api::body::{parse_body, require};
use crate::{ApiError, AutoRestartRequest, BotRequest};

use axum::body::Bytes;

#[test]
fn test_empty_body_yields_default() {
    let request: AutoRestartRequest = parse_body(&Bytes::new()).unwrap();

    assert!(request.enabled.is_none());
}

#[test]
fn test_whitespace_body_yields_default() {
    let request: BotRequest = parse_body(&Bytes::from_static(b"  \n")).unwrap();

    assert!(request.server.is_none());
    assert!(request.bot_id.is_none());
}

#[test]
fn test_valid_body_is_parsed() {
    let body = Bytes::from_static(br#"{"server": "server1", "bot_id": "bot2"}"#);

    let request: BotRequest = parse_body(&body).unwrap();

    assert_eq!(request.server.as_deref(), Some("server1"));
    assert_eq!(request.bot_id.as_deref(), Some("bot2"));
}

#[test]
fn test_malformed_body_is_bad_request() {
    let result: Result<BotRequest, ApiError> = parse_body(&Bytes::from_static(b"{server"));

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[test]
fn test_wrong_type_is_bad_request() {
    let result: Result<AutoRestartRequest, ApiError> =
        parse_body(&Bytes::from_static(br#"{"enabled": "yes"}"#));

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[test]
fn test_require_rejects_missing_and_blank() {
    assert!(require(None, "server").is_err());
    assert!(require(Some(String::from(" ")), "server").is_err());
    assert_eq!(require(Some(String::from("server1")), "server").unwrap(), "server1");
}

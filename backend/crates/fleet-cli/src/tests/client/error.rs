use crate::ClientError;

#[test]
fn test_api_error_display_includes_code_and_message() {
    let err = ClientError::api_error("NOT_FOUND", "Unknown server: server9");
    let text = err.to_string();
    assert!(text.contains("NOT_FOUND"));
    assert!(text.contains("Unknown server: server9"));
}

#[test]
fn test_json_error_conversion() {
    let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    let err: ClientError = source.into();
    assert!(matches!(err, ClientError::Json { .. }));
}

#[tokio::test]
async fn test_http_error_names_the_coordinator_url() {
    let source = reqwest::Client::new()
        .get("http://127.0.0.1:1/api/status")
        .send()
        .await
        .unwrap_err();
    let err = ClientError::from(source);
    match &err {
        ClientError::Http { url, .. } => assert!(url.contains("127.0.0.1:1")),
        other => panic!("expected HTTP error, got {other}"),
    }
    assert!(err.to_string().starts_with("Cannot reach coordinator"));
}

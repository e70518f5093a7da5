use crate::BotRuntimeStatus;

use serde_json::json;

#[test]
fn test_extra_agent_fields_are_preserved() {
    let status: BotRuntimeStatus =
        serde_json::from_value(json!({"running": true, "pid": 4242, "uptime": "3h"})).unwrap();

    assert!(status.running);
    assert_eq!(status.detail["pid"], 4242);
    assert_eq!(status.detail["uptime"], "3h");
}

#[test]
fn test_missing_running_defaults_to_false() {
    let status: BotRuntimeStatus = serde_json::from_value(json!({"pid": null})).unwrap();

    assert!(!status.running);
}

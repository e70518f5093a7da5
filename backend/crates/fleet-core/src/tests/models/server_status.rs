use crate::{BotRuntimeStatus, HealthState, ServerStatus};

use std::collections::BTreeMap;

#[test]
fn test_online_with_all_bots_running_qualifies() {
    let mut bots = BTreeMap::new();
    bots.insert("bot1".to_string(), BotRuntimeStatus::running());

    let status = ServerStatus::online(bots, true, Some(0.05), None);

    assert_eq!(status.status, HealthState::Online);
    assert!(status.qualifies_for_promotion());
    assert!(status.error.is_none());
}

#[test]
fn test_online_with_stopped_bot_does_not_qualify() {
    let mut bots = BTreeMap::new();
    bots.insert("bot1".to_string(), BotRuntimeStatus::running());
    bots.insert("bot2".to_string(), BotRuntimeStatus::stopped());

    let status = ServerStatus::online(bots, false, None, None);

    assert!(status.is_online());
    assert!(!status.qualifies_for_promotion());
    assert_eq!(status.stopped_bots(), vec!["bot2"]);
}

#[test]
fn test_error_and_offline_never_qualify() {
    let error = ServerStatus::error("HTTP 500");
    let offline = ServerStatus::offline("connection refused");

    assert_eq!(error.status, HealthState::Error);
    assert_eq!(error.error.as_deref(), Some("HTTP 500"));
    assert!(!error.all_bots_running);
    assert!(!error.qualifies_for_promotion());

    assert_eq!(offline.status, HealthState::Offline);
    assert!(offline.bots_status.is_empty());
    assert!(!offline.qualifies_for_promotion());
}

#[test]
fn test_serialization_skips_absent_optionals() {
    let json = serde_json::to_value(ServerStatus::offline("timeout")).unwrap();

    assert_eq!(json["status"], "offline");
    assert_eq!(json["error"], "timeout");
    assert!(json.get("response_time").is_none());
    assert!(json.get("details").is_none());
}

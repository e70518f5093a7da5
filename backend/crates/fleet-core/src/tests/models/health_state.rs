use crate::HealthState;

use std::str::FromStr;

#[test]
fn test_health_state_as_str() {
    assert_eq!(HealthState::Online.as_str(), "online");
    assert_eq!(HealthState::Offline.as_str(), "offline");
    assert_eq!(HealthState::Error.as_str(), "error");
}

#[test]
fn test_health_state_from_str() {
    assert_eq!(HealthState::from_str("online").unwrap(), HealthState::Online);
    assert_eq!(
        HealthState::from_str("offline").unwrap(),
        HealthState::Offline
    );
    assert_eq!(HealthState::from_str("error").unwrap(), HealthState::Error);
    assert!(HealthState::from_str("degraded").is_err());
}

#[test]
fn test_health_state_serializes_lowercase() {
    let json = serde_json::to_string(&HealthState::Offline).unwrap();
    assert_eq!(json, "\"offline\"");
}

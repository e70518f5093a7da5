use crate::tests::models::server;
use crate::{CoreError, Fleet};

#[test]
fn test_failover_order_puts_primary_first_then_ascending_id() {
    let fleet = Fleet::new(vec![
        server("backup-b", 7, false),
        server("backup-a", 3, false),
        server("main", 9, true),
    ])
    .unwrap();

    let order: Vec<&str> = fleet
        .failover_order()
        .iter()
        .map(|s| s.key.as_str())
        .collect();

    assert_eq!(order, vec!["main", "backup-a", "backup-b"]);
}

#[test]
fn test_lookup_server_by_key() {
    let fleet = Fleet::new(vec![server("server1", 1, true), server("server2", 2, false)]).unwrap();

    let srv = fleet.server("server2").unwrap();
    assert_eq!(srv.bot("bot1").unwrap().process_name, "bot1.py");
    assert!(srv.bot("bot9").is_none());
    assert!(fleet.server("server9").is_none());
}

#[test]
fn test_failover_order_covers_every_server_once() {
    let fleet = Fleet::new(vec![
        server("b", 2, false),
        server("a", 1, true),
        server("c", 2_000, false),
    ])
    .unwrap();

    let order = fleet.failover_order();

    assert_eq!(order.len(), fleet.servers().len());
    assert!(order[0].is_primary);
    assert_eq!(order.iter().filter(|s| s.is_primary).count(), 1);
}

#[test]
fn test_empty_fleet_rejected() {
    let result = Fleet::new(vec![]);
    assert!(matches!(result, Err(CoreError::InvalidFleet { .. })));
}

#[test]
fn test_no_primary_rejected() {
    let result = Fleet::new(vec![server("a", 1, false), server("b", 2, false)]);
    assert!(matches!(result, Err(CoreError::InvalidFleet { .. })));
}

#[test]
fn test_two_primaries_rejected() {
    let result = Fleet::new(vec![server("a", 1, true), server("b", 2, true)]);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("found 2"));
}

#[test]
fn test_duplicate_key_rejected() {
    let result = Fleet::new(vec![server("a", 1, true), server("a", 2, false)]);
    assert!(result.unwrap_err().to_string().contains("duplicate server key"));
}

#[test]
fn test_duplicate_id_rejected() {
    let result = Fleet::new(vec![server("a", 1, true), server("b", 1, false)]);
    assert!(result.unwrap_err().to_string().contains("duplicate server id"));
}

#[test]
fn test_empty_agent_url_rejected() {
    let mut bad = server("b", 2, false);
    bad.agent_url = "  ".to_string();

    let result = Fleet::new(vec![server("a", 1, true), bad]);
    assert!(result.unwrap_err().to_string().contains("agent_url"));
}

#[test]
fn test_agent_endpoint_trims_trailing_slash() {
    let mut srv = server("a", 1, true);
    srv.agent_url = "http://host:5001/".to_string();

    assert_eq!(srv.agent_endpoint("/health"), "http://host:5001/health");
}

use crate::{CoreError, CoreResult, ServerDescriptor};

use std::collections::HashSet;

use serde::Serialize;

/// The validated, static set of servers the coordinator manages.
///
/// Construction guarantees exactly one primary, unique keys and ids, and
/// non-empty agent URLs, so lookups and the failover order never have to
/// deal with an inconsistent fleet at runtime.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Fleet {
    servers: Vec<ServerDescriptor>,
}

impl Fleet {
    #[track_caller]
    pub fn new(servers: Vec<ServerDescriptor>) -> CoreResult<Self> {
        if servers.is_empty() {
            return Err(CoreError::invalid_fleet("at least one server is required"));
        }

        let primaries = servers.iter().filter(|s| s.is_primary).count();
        if primaries != 1 {
            return Err(CoreError::invalid_fleet(format!(
                "exactly one primary server is required, found {}",
                primaries
            )));
        }

        let mut keys = HashSet::new();
        let mut ids = HashSet::new();
        for server in &servers {
            if server.key.trim().is_empty() {
                return Err(CoreError::invalid_fleet("server key cannot be empty"));
            }
            if !keys.insert(server.key.as_str()) {
                return Err(CoreError::invalid_fleet(format!(
                    "duplicate server key '{}'",
                    server.key
                )));
            }
            if !ids.insert(server.id) {
                return Err(CoreError::invalid_fleet(format!(
                    "duplicate server id {} ('{}')",
                    server.id, server.key
                )));
            }
            if server.agent_url.trim().is_empty() {
                return Err(CoreError::invalid_fleet(format!(
                    "server '{}' has an empty agent_url",
                    server.key
                )));
            }
            if server.bots.keys().any(|id| id.trim().is_empty()) {
                return Err(CoreError::invalid_fleet(format!(
                    "server '{}' has a bot with an empty id",
                    server.key
                )));
            }
        }

        Ok(Self { servers })
    }

    /// Servers in configuration order.
    pub fn servers(&self) -> &[ServerDescriptor] {
        &self.servers
    }

    pub fn server(&self, key: &str) -> Option<&ServerDescriptor> {
        self.servers.iter().find(|s| s.key == key)
    }

    /// Failover order: the primary first, then the remaining servers by ascending id.
    pub fn failover_order(&self) -> Vec<&ServerDescriptor> {
        let (mut order, mut backups): (Vec<&ServerDescriptor>, Vec<&ServerDescriptor>) =
            self.servers.iter().partition(|s| s.is_primary);
        backups.sort_by_key(|s| s.id);

        order.extend(backups);
        order
    }
}

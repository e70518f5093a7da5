use crate::BotDescriptor;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Static description of one server in the fleet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerDescriptor {
    /// Unique key, e.g. "server1"
    pub key: String,
    /// Priority rank; lower ids come first among the backups
    pub id: u32,
    pub name: String,
    /// Base URL of the agent running on this host
    pub agent_url: String,
    #[serde(default)]
    pub root_path: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub bots: BTreeMap<String, BotDescriptor>,
}

impl ServerDescriptor {
    /// Look up a bot by id.
    pub fn bot(&self, bot_id: &str) -> Option<&BotDescriptor> {
        self.bots.get(bot_id)
    }

    /// Agent endpoint URL for the given path (e.g. "/health").
    pub fn agent_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.agent_url.trim_end_matches('/'), path)
    }
}

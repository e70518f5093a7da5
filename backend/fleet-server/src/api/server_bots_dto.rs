use fleet_core::{BotDescriptor, ServerDescriptor};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entry of `GET /api/bots`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerBotsDto {
    pub name: String,
    pub bots: BTreeMap<String, BotDescriptor>,
}

impl From<&ServerDescriptor> for ServerBotsDto {
    fn from(server: &ServerDescriptor) -> Self {
        Self {
            name: server.name.clone(),
            bots: server.bots.clone(),
        }
    }
}

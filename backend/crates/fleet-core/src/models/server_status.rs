use crate::{BotRuntimeStatus, HealthState};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Latest health poll result for one server. Overwritten on every poll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerStatus {
    pub status: HealthState,
    pub bots_status: BTreeMap<String, BotRuntimeStatus>,
    pub all_bots_running: bool,
    pub last_check: DateTime<Utc>,
    /// Round-trip time of the health request in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Raw health document returned by the agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ServerStatus {
    pub fn online(
        bots_status: BTreeMap<String, BotRuntimeStatus>,
        all_bots_running: bool,
        response_time: Option<f64>,
        details: Option<Value>,
    ) -> Self {
        Self {
            status: HealthState::Online,
            bots_status,
            all_bots_running,
            last_check: Utc::now(),
            response_time,
            error: None,
            details,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::unhealthy(HealthState::Error, message.into())
    }

    pub fn offline(message: impl Into<String>) -> Self {
        Self::unhealthy(HealthState::Offline, message.into())
    }

    fn unhealthy(status: HealthState, message: String) -> Self {
        Self {
            status,
            bots_status: BTreeMap::new(),
            all_bots_running: false,
            last_check: Utc::now(),
            response_time: None,
            error: Some(message),
            details: None,
        }
    }

    pub fn is_online(&self) -> bool {
        self.status == HealthState::Online
    }

    /// Whether this server may be promoted to active: online with every bot running.
    pub fn qualifies_for_promotion(&self) -> bool {
        self.is_online() && self.all_bots_running
    }

    /// Ids of bots the agent reports as not running, in id order.
    pub fn stopped_bots(&self) -> Vec<&str> {
        self.bots_status
            .iter()
            .filter(|(_, status)| !status.running)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

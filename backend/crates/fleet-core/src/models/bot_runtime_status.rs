use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-bot state as reported by an agent's health document.
///
/// Only `running` is interpreted; everything else the agent sends is kept
/// verbatim in `detail` and passed through to operators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BotRuntimeStatus {
    #[serde(default)]
    pub running: bool,
    #[serde(flatten)]
    pub detail: Map<String, Value>,
}

impl BotRuntimeStatus {
    pub fn running() -> Self {
        Self {
            running: true,
            detail: Map::new(),
        }
    }

    pub fn stopped() -> Self {
        Self {
            running: false,
            detail: Map::new(),
        }
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BotAction {
    Start,
    Stop,
}

impl BotAction {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }

    /// Agent endpoint path for this action
    pub fn agent_path(&self) -> &str {
        match self {
            Self::Start => "/start_bot",
            Self::Stop => "/stop_bot",
        }
    }
}

impl fmt::Display for BotAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

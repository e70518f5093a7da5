use crate::BotAction;

use serde::{Deserialize, Serialize};

/// Result of one start/stop attempt inside a batch operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BotOutcome {
    pub server_key: String,
    pub bot_id: String,
    pub action: BotAction,
    pub success: bool,
}

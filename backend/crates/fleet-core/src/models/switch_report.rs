use crate::BotOutcome;

use serde::{Deserialize, Serialize};

/// Everything that happened while making a server active.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwitchReport {
    pub target: String,
    /// Stop attempts on every other server, in fleet order
    pub stopped: Vec<BotOutcome>,
    /// Start attempts on the target, in bot order
    pub started: Vec<BotOutcome>,
}

impl SwitchReport {
    pub fn failures(&self) -> usize {
        self.stopped
            .iter()
            .chain(self.started.iter())
            .filter(|o| !o.success)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.failures() == 0
    }
}

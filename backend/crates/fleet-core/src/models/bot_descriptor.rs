use serde::{Deserialize, Serialize};

/// Static description of one bot process on a server.
///
/// The bot id is the key under which the descriptor is stored in
/// [`ServerDescriptor::bots`](crate::ServerDescriptor).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BotDescriptor {
    /// Display name used in logs and notifications
    pub name: String,
    /// Shell command the agent runs to start the bot
    pub start_command: String,
    /// Shell command the agent runs to stop the bot
    pub stop_command: String,
    /// Process name used by the agent to match the running process
    pub process_name: String,
}

impl BotDescriptor {
    pub fn new(
        name: impl Into<String>,
        start_command: impl Into<String>,
        stop_command: impl Into<String>,
        process_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_command: start_command.into(),
            stop_command: stop_command.into(),
            process_name: process_name.into(),
        }
    }
}

use async_trait::async_trait;
use fleet_core::{BotDescriptor, ServerDescriptor, ServerStatus};

/// Boundary to the agent service running on each server.
///
/// Implementations never fail: transport and protocol problems are folded
/// into the returned [`ServerStatus`] or a `false` command result, and are
/// logged where they happen.
#[async_trait]
pub trait AgentApi: Send + Sync {
    /// Poll the agent's health document.
    async fn check_health(&self, server: &ServerDescriptor) -> ServerStatus;

    /// Ask the agent to run the bot's start command. True iff the agent accepted it.
    async fn start_bot(&self, server: &ServerDescriptor, bot_id: &str, bot: &BotDescriptor) -> bool;

    /// Ask the agent to run the bot's stop command. True iff the agent accepted it.
    async fn stop_bot(&self, server: &ServerDescriptor, bot_id: &str, bot: &BotDescriptor) -> bool;
}

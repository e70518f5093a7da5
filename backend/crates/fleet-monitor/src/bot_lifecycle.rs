use crate::{AgentApi, Metrics, MonitorError, Result};

use std::sync::Arc;
use std::time::Duration;

use fleet_core::{BotAction, BotDescriptor, BotOutcome, Fleet, ServerDescriptor};
use log::{info, warn};

/// Start/stop/restart primitives shared by the monitor loop, the failover
/// switch and manual operator actions.
#[derive(Clone)]
pub struct BotLifecycleManager {
    fleet: Arc<Fleet>,
    agent: Arc<dyn AgentApi>,
    restart_settle: Duration,
    metrics: Metrics,
}

impl BotLifecycleManager {
    pub fn new(fleet: Arc<Fleet>, agent: Arc<dyn AgentApi>, restart_settle: Duration) -> Self {
        Self {
            fleet,
            agent,
            restart_settle,
            metrics: Metrics::new(),
        }
    }

    pub async fn start_specific_bot(&self, server_key: &str, bot_id: &str) -> Result<bool> {
        let (server, bot) = self.resolve(server_key, bot_id)?;
        Ok(self.run(server, bot_id, bot, BotAction::Start).await)
    }

    pub async fn stop_specific_bot(&self, server_key: &str, bot_id: &str) -> Result<bool> {
        let (server, bot) = self.resolve(server_key, bot_id)?;
        Ok(self.run(server, bot_id, bot, BotAction::Stop).await)
    }

    /// Stop, wait for the settle delay, then start. A failed stop skips the start.
    pub async fn restart_specific_bot(&self, server_key: &str, bot_id: &str) -> Result<bool> {
        let (server, bot) = self.resolve(server_key, bot_id)?;
        info!("Restarting bot {} on server {}", bot.name, server.name);

        if !self.run(server, bot_id, bot, BotAction::Stop).await {
            warn!(
                "Restart of bot {} on server {} aborted: stop failed",
                bot.name, server.name
            );
            return Ok(false);
        }

        tokio::time::sleep(self.restart_settle).await;

        Ok(self.run(server, bot_id, bot, BotAction::Start).await)
    }

    /// Start every bot on `server` in bot order. Never short-circuits.
    pub async fn start_all_bots(&self, server: &ServerDescriptor) -> Vec<BotOutcome> {
        self.run_all(server, BotAction::Start).await
    }

    /// Stop every bot on `server` in bot order. Never short-circuits.
    pub async fn stop_all_bots(&self, server: &ServerDescriptor) -> Vec<BotOutcome> {
        self.run_all(server, BotAction::Stop).await
    }

    async fn run_all(&self, server: &ServerDescriptor, action: BotAction) -> Vec<BotOutcome> {
        let mut outcomes = Vec::with_capacity(server.bots.len());
        for (bot_id, bot) in &server.bots {
            let success = self.run(server, bot_id, bot, action).await;
            outcomes.push(BotOutcome {
                server_key: server.key.clone(),
                bot_id: bot_id.clone(),
                action,
                success,
            });
        }

        let failed = outcomes.iter().filter(|o| !o.success).count();
        if failed > 0 {
            warn!(
                "{} of {} bots failed to {} on server {}",
                failed,
                outcomes.len(),
                action,
                server.name
            );
        }

        outcomes
    }

    async fn run(
        &self,
        server: &ServerDescriptor,
        bot_id: &str,
        bot: &BotDescriptor,
        action: BotAction,
    ) -> bool {
        let success = match action {
            BotAction::Start => self.agent.start_bot(server, bot_id, bot).await,
            BotAction::Stop => self.agent.stop_bot(server, bot_id, bot).await,
        };
        self.metrics.bot_command(action, success);
        success
    }

    fn resolve(&self, server_key: &str, bot_id: &str) -> Result<(&ServerDescriptor, &BotDescriptor)> {
        let server = self
            .fleet
            .server(server_key)
            .ok_or_else(|| MonitorError::unknown_server(server_key))?;
        let bot = server
            .bot(bot_id)
            .ok_or_else(|| MonitorError::unknown_bot(server_key, bot_id))?;
        Ok((server, bot))
    }
}

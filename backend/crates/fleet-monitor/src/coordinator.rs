use crate::{
    AgentApi, BotLifecycleManager, FailoverController, FailoverDecision, HttpAgentClient,
    MonitorLoop, MonitorSettings, MonitorState, NotificationSink, Result, notifier_from_config,
};

use std::sync::Arc;

use fleet_config::Config;
use fleet_core::{Fleet, MonitorSnapshot, SwitchReport};
use log::info;

/// Owns the monitor state and every component that acts on it. This is the
/// single entry point for operator actions.
pub struct Coordinator {
    fleet: Arc<Fleet>,
    state: MonitorState,
    lifecycle: BotLifecycleManager,
    controller: FailoverController,
    monitor: MonitorLoop,
}

impl Coordinator {
    /// Build a coordinator that talks HTTP to the configured agents.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fleet = config.fleet()?;
        let agent = Arc::new(HttpAgentClient::new(
            config.monitoring.health_check_timeout(),
        )?);
        let notifier = notifier_from_config(&config.notification)?;
        info!("Notifications via {}", notifier.name());

        Ok(Self::new(
            fleet,
            agent,
            notifier,
            MonitorSettings::from(&config.monitoring),
        ))
    }

    pub fn new(
        fleet: Fleet,
        agent: Arc<dyn AgentApi>,
        notifier: Arc<dyn NotificationSink>,
        settings: MonitorSettings,
    ) -> Self {
        let fleet = Arc::new(fleet);
        let state = MonitorState::new(settings.auto_restart);
        let lifecycle =
            BotLifecycleManager::new(Arc::clone(&fleet), Arc::clone(&agent), settings.restart_settle);
        let controller = FailoverController::new(
            Arc::clone(&fleet),
            state.clone(),
            lifecycle.clone(),
            notifier,
            &settings,
        );
        let monitor = MonitorLoop::new(
            Arc::clone(&fleet),
            agent,
            state.clone(),
            controller.clone(),
            lifecycle.clone(),
            settings.interval,
        );

        Self {
            fleet,
            state,
            lifecycle,
            controller,
            monitor,
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub async fn status(&self) -> MonitorSnapshot {
        self.state.snapshot().await
    }

    pub async fn is_monitoring(&self) -> bool {
        self.state.is_monitoring().await
    }

    pub async fn auto_restart_enabled(&self) -> bool {
        self.state.auto_restart_enabled().await
    }

    /// Returns false if monitoring was already running.
    pub async fn start_monitoring(&self) -> bool {
        self.monitor.start().await
    }

    /// Returns false if monitoring was not running.
    pub async fn stop_monitoring(&self) -> bool {
        self.monitor.stop().await
    }

    /// Run one monitoring iteration immediately.
    pub async fn run_once(&self) {
        self.monitor.run_once().await
    }

    /// Run one failover evaluation against the current statuses.
    pub async fn evaluate_failover(&self) -> FailoverDecision {
        self.controller.evaluate().await
    }

    /// Wait for a scheduled promotion to finish.
    pub async fn wait_for_promotion(&self) {
        self.controller.wait_pending().await
    }

    pub async fn switch_server(&self, server_key: &str) -> Result<SwitchReport> {
        self.controller.switch_to(server_key).await
    }

    pub async fn start_bot(&self, server_key: &str, bot_id: &str) -> Result<bool> {
        self.lifecycle.start_specific_bot(server_key, bot_id).await
    }

    pub async fn stop_bot(&self, server_key: &str, bot_id: &str) -> Result<bool> {
        self.lifecycle.stop_specific_bot(server_key, bot_id).await
    }

    pub async fn restart_bot(&self, server_key: &str, bot_id: &str) -> Result<bool> {
        self.lifecycle.restart_specific_bot(server_key, bot_id).await
    }

    pub async fn set_auto_restart(&self, enabled: bool) {
        self.state.set_auto_restart(enabled).await;
        info!(
            "Auto-restart {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }
}

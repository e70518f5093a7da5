use crate::{
    AgentApi, BotLifecycleManager, FailoverController, Metrics, MonitorState, StopGuard, StopSignal,
};

use std::sync::Arc;
use std::time::{Duration, Instant};

use fleet_core::{Fleet, HealthState, ServerStatus};
use futures::future::join_all;
use log::{error, info, warn};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

struct LoopTask {
    stop: StopSignal,
    handle: JoinHandle<()>,
}

/// Periodic poll → decide → sweep cycle.
#[derive(Clone)]
pub struct MonitorLoop {
    fleet: Arc<Fleet>,
    agent: Arc<dyn AgentApi>,
    state: MonitorState,
    controller: FailoverController,
    lifecycle: BotLifecycleManager,
    interval: Duration,
    task: Arc<Mutex<Option<LoopTask>>>,
    metrics: Metrics,
}

impl MonitorLoop {
    pub fn new(
        fleet: Arc<Fleet>,
        agent: Arc<dyn AgentApi>,
        state: MonitorState,
        controller: FailoverController,
        lifecycle: BotLifecycleManager,
        interval: Duration,
    ) -> Self {
        Self {
            fleet,
            agent,
            state,
            controller,
            lifecycle,
            interval,
            task: Arc::new(Mutex::new(None)),
            metrics: Metrics::new(),
        }
    }

    /// Spawn the loop. Returns false (and does nothing) if it is already running.
    pub async fn start(&self) -> bool {
        let mut slot = self.task.lock().await;
        if !self.state.begin_monitoring().await {
            info!("Monitoring already running");
            return false;
        }

        let stop = StopSignal::new();
        let guard = stop.guard();
        let this = self.clone();
        let handle = tokio::spawn(async move { this.run(guard).await });
        *slot = Some(LoopTask { stop, handle });

        self.metrics.monitoring_active(true);
        info!("Monitoring started (interval {:?})", self.interval);
        true
    }

    /// Stop the loop and cancel any pending promotion. Returns once the loop
    /// task has exited. Returns whether monitoring was running.
    pub async fn stop(&self) -> bool {
        let mut slot = self.task.lock().await;
        let was_running = self.state.end_monitoring().await;

        if let Some(task) = slot.take() {
            task.stop.trigger();
            if let Err(e) = task.handle.await {
                error!("Monitor loop task failed: {e}");
            }
        }

        self.controller.cancel_pending().await;
        self.metrics.monitoring_active(false);

        if was_running {
            info!("Monitoring stopped");
        }
        was_running
    }

    async fn run(self, mut stop: StopGuard) {
        while !stop.is_stopped() && self.state.is_monitoring().await {
            let started = Instant::now();
            let this = self.clone();

            // Run the tick in its own task so a panic is contained and logged
            match tokio::spawn(async move { this.run_once().await }).await {
                Ok(()) => self.metrics.tick_completed(started.elapsed()),
                Err(e) => {
                    error!("Monitoring iteration failed: {e}");
                    self.metrics.loop_fault();
                }
            }

            tokio::select! {
                _ = stop.wait() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!("Monitor loop exited");
    }

    /// One iteration: poll every server, commit, evaluate failover, sweep.
    pub async fn run_once(&self) {
        let agent = &self.agent;
        let polls = self.fleet.servers().iter().map(move |server| async move {
            let status = agent.check_health(server).await;
            (server, status)
        });
        let results = join_all(polls).await;

        let mut committed = Vec::with_capacity(results.len());
        for (server, status) in results {
            self.log_status(&server.name, &status);
            self.metrics.health_checked(status.status);
            committed.push((server.key.clone(), status));
        }
        self.state.record_statuses(committed).await;

        self.controller.evaluate().await;

        if self.state.auto_restart_enabled().await {
            self.auto_restart_sweep().await;
        }
    }

    /// Start every bot the active server reports as not running. Only runs
    /// while the active server is online.
    ///
    /// Runs under the switch lock: mid-switch, the outgoing server still reads
    /// as active while its bots are already stopped.
    async fn auto_restart_sweep(&self) {
        let _switch = self.controller.lock_switch().await;

        let Some(active) = self.state.active_server().await else {
            return;
        };
        let Some(status) = self.state.status(&active).await else {
            return;
        };
        if !status.is_online() {
            return;
        }

        for bot_id in status.stopped_bots() {
            info!("Auto-restarting bot {bot_id} on server {active}");
            match self.lifecycle.start_specific_bot(&active, bot_id).await {
                Ok(true) => {}
                Ok(false) => warn!("Auto-restart of bot {bot_id} on server {active} failed"),
                Err(e) => warn!("Auto-restart skipped: {e}"),
            }
        }
    }

    fn log_status(&self, server_name: &str, status: &ServerStatus) {
        match status.status {
            HealthState::Online => info!("Server {}: {}", server_name, status.status),
            HealthState::Offline | HealthState::Error => error!(
                "Server {}: {} ({})",
                server_name,
                status.status,
                status.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

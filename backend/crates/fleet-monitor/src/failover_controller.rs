use crate::candidate::{select_candidate, transition_message};
use crate::{
    BotLifecycleManager, FailoverDecision, FailoverGuard, Metrics, MonitorError, MonitorSettings,
    MonitorState, NotificationSink, Result, StopGuard, StopSignal,
};

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeDelta, Utc};
use fleet_core::{Fleet, PendingPromotion, ServerDescriptor, SwitchPolicy, SwitchReport};
use log::{debug, error, info, warn};
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;

struct PendingTask {
    cancel: StopSignal,
    handle: JoinHandle<()>,
}

/// Priority-ordered promotion with notify-then-delay.
///
/// At most one promotion is in flight (the failover guard). The switch
/// sequence itself runs under `switch_lock`, which manual switches share.
#[derive(Clone)]
pub struct FailoverController {
    fleet: Arc<Fleet>,
    state: MonitorState,
    lifecycle: BotLifecycleManager,
    notifier: Arc<dyn NotificationSink>,
    announcement_delay: Duration,
    switch_policy: SwitchPolicy,
    switch_lock: Arc<Mutex<()>>,
    pending_task: Arc<Mutex<Option<PendingTask>>>,
    metrics: Metrics,
}

impl FailoverController {
    pub fn new(
        fleet: Arc<Fleet>,
        state: MonitorState,
        lifecycle: BotLifecycleManager,
        notifier: Arc<dyn NotificationSink>,
        settings: &MonitorSettings,
    ) -> Self {
        Self {
            fleet,
            state,
            lifecycle,
            notifier,
            announcement_delay: settings.announcement_delay,
            switch_policy: settings.switch_policy,
            switch_lock: Arc::new(Mutex::new(())),
            pending_task: Arc::new(Mutex::new(None)),
            metrics: Metrics::new(),
        }
    }

    /// Pick the candidate from the latest statuses and, if it differs from the
    /// active server, announce and schedule its promotion.
    pub async fn evaluate(&self) -> FailoverDecision {
        let statuses = self.state.statuses().await;
        let order = self.fleet.failover_order();

        let Some((index, candidate)) = select_candidate(&order, &statuses) else {
            debug!("No server qualifies for promotion");
            return FailoverDecision::NoCandidate;
        };

        if self.state.active_server().await.as_deref() == Some(candidate.key.as_str()) {
            return FailoverDecision::AlreadyActive;
        }

        let Some(guard) = self.state.try_begin_failover() else {
            info!(
                "Failover already in progress, skipping promotion of {}",
                candidate.name
            );
            return FailoverDecision::Busy;
        };

        // Held until the task is stored so cancel_pending() can't miss it
        let mut slot = self.pending_task.lock().await;

        let reason = transition_message(&order, index, self.announcement_delay);
        let announced_at = Utc::now();
        let execute_at = announced_at
            + TimeDelta::from_std(self.announcement_delay).unwrap_or_else(|_| TimeDelta::zero());

        self.state
            .set_pending(Some(PendingPromotion {
                target: candidate.key.clone(),
                reason: reason.clone(),
                announced_at,
                execute_at,
            }))
            .await;

        info!("{reason}");
        self.metrics.failover_event("scheduled");

        let cancel = StopSignal::new();
        let stop = cancel.guard();
        let controller = self.clone();
        let target = candidate.key.clone();
        let handle = tokio::spawn(async move {
            controller.run_promotion(guard, stop, target, reason).await;
        });

        *slot = Some(PendingTask { cancel, handle });

        FailoverDecision::Scheduled {
            target: candidate.key.clone(),
        }
    }

    /// Deferred half of a promotion: notify, wait, switch. Owns the guard so
    /// it is released however the task ends.
    async fn run_promotion(
        &self,
        _guard: FailoverGuard,
        mut stop: StopGuard,
        target: String,
        reason: String,
    ) {
        self.notifier.send(&reason).await;

        tokio::select! {
            _ = stop.wait() => {
                info!("Pending promotion of {target} cancelled");
                self.metrics.failover_event("cancelled");
                self.state.set_pending(None).await;
                return;
            }
            _ = tokio::time::sleep(self.announcement_delay) => {}
        }

        if self.switch_policy == SwitchPolicy::Reconfirm {
            let still_qualifies = self
                .state
                .status(&target)
                .await
                .is_some_and(|status| status.qualifies_for_promotion());
            if !still_qualifies {
                warn!("Promotion of {target} aborted: server no longer qualifies");
                self.metrics.failover_event("aborted");
                self.state.set_pending(None).await;
                return;
            }
        }

        match self.fleet.server(&target) {
            Some(server) => {
                self.execute_switch(server).await;
                self.metrics.failover_event("completed");
            }
            None => error!("Promotion target {target} is not configured"),
        }

        self.state.set_pending(None).await;
    }

    /// Operator-initiated switch: no announcement, no delay. Cancels any
    /// pending automatic promotion first.
    pub async fn switch_to(&self, server_key: &str) -> Result<SwitchReport> {
        let server = self
            .fleet
            .server(server_key)
            .ok_or_else(|| MonitorError::unknown_server(server_key))?;

        self.cancel_pending().await;

        info!("Manual switch to server {}", server.name);
        Ok(self.execute_switch(server).await)
    }

    /// Stop all bots everywhere else, start all bots on `server`, mark it active.
    async fn execute_switch(&self, server: &ServerDescriptor) -> SwitchReport {
        let _lock = self.switch_lock.lock().await;
        info!("Switching active server to {}", server.name);

        let mut stopped = Vec::new();
        for other in self.fleet.servers().iter().filter(|s| s.key != server.key) {
            stopped.extend(self.lifecycle.stop_all_bots(other).await);
        }

        let started = self.lifecycle.start_all_bots(server).await;
        self.state.set_active(&server.key).await;

        let report = SwitchReport {
            target: server.key.clone(),
            stopped,
            started,
        };

        if report.is_clean() {
            info!("Switched to server {}", server.name);
        } else {
            warn!(
                "Switched to server {} with {} failed bot commands",
                server.name,
                report.failures()
            );
        }

        report
    }

    /// Hold off switches while the caller acts on the active server. A switch
    /// already running finishes first, so the caller sees its result.
    pub(crate) async fn lock_switch(&self) -> MutexGuard<'_, ()> {
        self.switch_lock.lock().await
    }

    /// Cancel a pending promotion and wait for its task to finish. A
    /// promotion already past its delay runs to completion.
    pub async fn cancel_pending(&self) {
        let task = self.pending_task.lock().await.take();
        if let Some(task) = task {
            task.cancel.trigger();
            if let Err(e) = task.handle.await {
                error!("Promotion task failed: {e}");
            }
        }
    }

    /// Wait for a pending promotion to finish without cancelling it.
    pub async fn wait_pending(&self) {
        let task = self.pending_task.lock().await.take();
        if let Some(task) = task
            && let Err(e) = task.handle.await
        {
            error!("Promotion task failed: {e}");
        }
    }
}

use crate::FailoverGuard;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use fleet_core::{MonitorSnapshot, PendingPromotion, ServerStatus};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct MonitorInner {
    statuses: BTreeMap<String, ServerStatus>,
    active_server: Option<String>,
    is_monitoring: bool,
    auto_restart_enabled: bool,
    last_switch: Option<DateTime<Utc>>,
    pending: Option<PendingPromotion>,
}

/// Process-wide monitor state.
///
/// All mutable fields sit behind one `RwLock`; callers never hold it across
/// network I/O. The failover flag lives outside the lock so it can be
/// claimed without awaiting.
#[derive(Clone)]
pub struct MonitorState {
    inner: Arc<RwLock<MonitorInner>>,
    failover_in_progress: Arc<AtomicBool>,
}

impl MonitorState {
    pub fn new(auto_restart_enabled: bool) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MonitorInner {
                auto_restart_enabled,
                ..Default::default()
            })),
            failover_in_progress: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Commit a tick's poll results in a single write.
    pub async fn record_statuses(&self, statuses: impl IntoIterator<Item = (String, ServerStatus)>) {
        let mut inner = self.inner.write().await;
        inner.statuses.extend(statuses);
    }

    pub async fn status(&self, key: &str) -> Option<ServerStatus> {
        self.inner.read().await.statuses.get(key).cloned()
    }

    pub async fn statuses(&self) -> BTreeMap<String, ServerStatus> {
        self.inner.read().await.statuses.clone()
    }

    pub async fn active_server(&self) -> Option<String> {
        self.inner.read().await.active_server.clone()
    }

    /// Mark `key` active and stamp the switch time.
    pub async fn set_active(&self, key: &str) {
        let mut inner = self.inner.write().await;
        inner.active_server = Some(key.to_string());
        inner.last_switch = Some(Utc::now());
    }

    pub async fn is_monitoring(&self) -> bool {
        self.inner.read().await.is_monitoring
    }

    /// Set the monitoring flag; returns false if it was already set.
    pub async fn begin_monitoring(&self) -> bool {
        let mut inner = self.inner.write().await;
        !std::mem::replace(&mut inner.is_monitoring, true)
    }

    /// Clear the monitoring flag; returns whether it was set.
    pub async fn end_monitoring(&self) -> bool {
        let mut inner = self.inner.write().await;
        std::mem::replace(&mut inner.is_monitoring, false)
    }

    pub async fn auto_restart_enabled(&self) -> bool {
        self.inner.read().await.auto_restart_enabled
    }

    pub async fn set_auto_restart(&self, enabled: bool) {
        self.inner.write().await.auto_restart_enabled = enabled;
    }

    pub async fn pending(&self) -> Option<PendingPromotion> {
        self.inner.read().await.pending.clone()
    }

    pub async fn set_pending(&self, pending: Option<PendingPromotion>) {
        self.inner.write().await.pending = pending;
    }

    pub async fn snapshot(&self) -> MonitorSnapshot {
        let inner = self.inner.read().await;
        MonitorSnapshot {
            servers: inner.statuses.clone(),
            active_server: inner.active_server.clone(),
            is_monitoring: inner.is_monitoring,
            auto_restart_enabled: inner.auto_restart_enabled,
            last_switch: inner.last_switch,
            pending_promotion: inner.pending.clone(),
        }
    }

    pub fn try_begin_failover(&self) -> Option<FailoverGuard> {
        FailoverGuard::try_acquire(&self.failover_in_progress)
    }

    pub fn is_failover_in_progress(&self) -> bool {
        self.failover_in_progress.load(Ordering::Acquire)
    }
}

use crate::StopSignal;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

/// Helper for async tasks that must end when a [`StopSignal`] fires
pub struct StopGuard {
    stop_rx: broadcast::Receiver<()>,
    triggered: Arc<AtomicBool>,
}

impl StopGuard {
    pub fn new(signal: &StopSignal) -> Self {
        Self {
            stop_rx: signal.subscribe(),
            triggered: signal.flag(),
        }
    }

    /// Wait for the stop signal (returns immediately if it already fired)
    pub async fn wait(&mut self) {
        if self.is_stopped() {
            return;
        }
        let _ = self.stop_rx.recv().await;
    }

    /// Non-blocking check
    pub fn is_stopped(&self) -> bool {
        self.triggered.load(Ordering::Acquire)
    }
}

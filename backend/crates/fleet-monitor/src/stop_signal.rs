use crate::StopGuard;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

/// One-shot stop notification shared between a controller and its tasks.
///
/// Used for server shutdown, for ending the monitor loop, and for cancelling
/// a pending promotion. Unlike a bare broadcast channel the signal is sticky:
/// guards created after `trigger()` still observe it.
#[derive(Clone)]
pub struct StopSignal {
    stop_tx: broadcast::Sender<()>,
    triggered: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        let (stop_tx, _) = broadcast::channel(1);
        Self {
            stop_tx,
            triggered: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a receiver for stop notifications
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.stop_tx.subscribe()
    }

    /// Notify every guard. Later calls are no-ops.
    pub fn trigger(&self) {
        if !self.triggered.swap(true, Ordering::AcqRel) {
            let _ = self.stop_tx.send(());
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::Acquire)
    }

    pub fn guard(&self) -> StopGuard {
        StopGuard::new(self)
    }

    pub(crate) fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.triggered)
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Held while a promotion is in flight. Dropping it clears the flag, so the
/// guard is released on every exit path, including task cancellation.
pub struct FailoverGuard {
    flag: Arc<AtomicBool>,
}

impl FailoverGuard {
    /// Acquire the flag with compare-and-swap; `None` if already held.
    pub(crate) fn try_acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for FailoverGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

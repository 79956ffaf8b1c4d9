use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Single-flight gate over search requests.
///
/// Both watchers consult the gate before dispatching, so at most one search is
/// ever in flight. Acquisition is a compare-and-swap, which closes the
/// double-fire window a plain read-then-set flag would leave between the input
/// and scroll checks.
///
/// The completion poll releases the gate exactly once per settled request,
/// success or failure; `release` is unconditional so a failed request can
/// never leave the gate stuck.
#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    in_progress: Arc<AtomicBool>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt the `ready -> in_progress` transition. Returns whether the
    /// caller won the gate.
    pub fn try_acquire(&self) -> bool {
        self.in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Unconditional transition back to `ready`.
    pub fn release(&self) {
        self.in_progress.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        !self.in_progress.load(Ordering::Acquire)
    }
}

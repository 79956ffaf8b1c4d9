use std::time::{Duration, Instant};

/// Trailing-edge debounce over the search input.
///
/// Edits are recorded through [`observe`](InputWatcher::observe); once the
/// debounce interval passes without a further edit, [`settled`]
/// (InputWatcher::settled) yields the value, provided it differs from the last
/// value a request was issued for. The caller advances `last_seen` with
/// [`commit`](InputWatcher::commit) only after it actually dispatches, so a
/// value that loses the request gate stays pending and is retried on a later
/// frame instead of being dropped.
#[derive(Debug)]
pub struct InputWatcher {
    last_seen: String,
    pending: Option<PendingEdit>,
    debounce: Duration,
}

#[derive(Debug)]
struct PendingEdit {
    value: String,
    due_at: Instant,
}

impl InputWatcher {
    pub fn new(debounce: Duration) -> Self {
        Self {
            last_seen: String::new(),
            pending: None,
            debounce,
        }
    }

    /// Record the input's current value after an edit event.
    pub fn observe(&mut self, current: &str, now: Instant) {
        if let Some(pending) = &self.pending {
            if pending.value == current {
                return;
            }
        }
        self.pending = Some(PendingEdit {
            value: current.to_owned(),
            due_at: now + self.debounce,
        });
    }

    /// The debounced value ready to fire, if any.
    ///
    /// An edit that settles back to `last_seen` (typed and reverted within the
    /// debounce window) is discarded here: unchanged values never issue a
    /// request. The empty string is an ordinary distinct value.
    pub fn settled(&mut self, now: Instant) -> Option<String> {
        let pending = self.pending.as_ref()?;
        if now < pending.due_at {
            return None;
        }
        if pending.value == self.last_seen {
            self.pending = None;
            return None;
        }
        Some(pending.value.clone())
    }

    /// Mark the settled value as requested. Called once per dispatched search.
    pub fn commit(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.last_seen = pending.value;
        }
    }

    /// When the pending edit becomes due, for repaint scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due_at)
    }

    pub fn last_seen(&self) -> &str {
        &self.last_seen
    }
}

/// Scroll geometry sampled from the results view each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub content_height: f32,
    pub viewport_height: f32,
}

impl ScrollMetrics {
    /// Distance left to scroll before the content bottom.
    pub fn remaining(&self) -> f32 {
        self.content_height - (self.viewport_height + self.offset)
    }
}

/// Near-bottom detection with a single-fire latch.
///
/// The bottom condition is `remaining <= threshold` rather than exact
/// equality, so sub-pixel layout variance cannot mask it. Once tripped, the
/// watcher stays disarmed until [`rearm`](ScrollWatcher::rearm) (new rows
/// arrived) or until the position leaves the bottom zone, so sitting at the
/// bottom does not fire every frame.
#[derive(Debug)]
pub struct ScrollWatcher {
    threshold: f32,
    armed: bool,
}

impl ScrollWatcher {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            armed: true,
        }
    }

    /// Sample the current geometry; true exactly once per arrival at the
    /// bottom.
    pub fn observe(&mut self, metrics: &ScrollMetrics) -> bool {
        if metrics.remaining() > self.threshold {
            self.armed = true;
            return false;
        }
        if self.armed {
            self.armed = false;
            return true;
        }
        false
    }

    /// Re-enable firing after new content arrived.
    pub fn rearm(&mut self) {
        self.armed = true;
    }
}

use crate::models::{SearchQuery, UserRow};
use crate::search::{
    InputWatcher, PendingSearch, RequestGate, ScrollMetrics, ScrollWatcher, SearchClient,
    SearchKind,
};
use crate::ui::Preloader;
use std::time::Instant;

/// The widget's entire mutable state: the search text, both watch conditions,
/// the single-flight gate, the accumulated rows and the one pending request.
///
/// Everything here is mutated on the UI thread only; the async runtime is
/// reached solely through [`SearchClient::dispatch`], and results come back
/// through the non-blocking [`poll_pending`](AppState::poll_pending) settle.
pub struct AppState {
    pub search_text: String,
    pub rows: Vec<UserRow>,
    pub preloader: Preloader,
    input: InputWatcher,
    scroll: ScrollWatcher,
    gate: RequestGate,
    client: SearchClient,
    pending: Option<PendingSearch>,
    max_rows: usize,
}

impl AppState {
    pub fn new(client: SearchClient, config: &crate::state::AppConfig) -> Self {
        Self {
            search_text: String::new(),
            rows: Vec::new(),
            preloader: Preloader::new(),
            input: InputWatcher::new(config.debounce()),
            scroll: ScrollWatcher::new(config.near_bottom_threshold),
            gate: RequestGate::new(),
            client,
            pending: None,
            max_rows: config.max_rows,
        }
    }

    /// Forward an input edit to the debounce watcher. Called from the search
    /// panel whenever the text edit reports a change.
    pub fn note_input_edit(&mut self, now: Instant) {
        self.input.observe(&self.search_text, now);
    }

    /// Fire a replacing search once the debounced input value is due.
    ///
    /// The last-seen value only advances when the gate is won, so a value
    /// that collides with an in-flight request is retried on a later frame
    /// rather than lost. Unchanged values are discarded inside the watcher
    /// and never reach the gate.
    pub fn poll_input(&mut self, now: Instant) {
        let Some(value) = self.input.settled(now) else {
            return;
        };
        if !self.gate.try_acquire() {
            return;
        }
        self.input.commit();
        self.preloader.show();
        self.pending = Some(
            self.client
                .dispatch(SearchQuery::new(value), SearchKind::Replace),
        );
    }

    /// Fire an appending search when the results view reaches the bottom.
    ///
    /// No-op while the input is empty or a request is in flight; in the
    /// in-flight case the bottom latch is left untouched, so reaching the
    /// bottom during a request fires once the gate frees.
    pub fn poll_scroll(&mut self, metrics: &ScrollMetrics) {
        if self.search_text.is_empty() {
            return;
        }
        if !self.gate.is_ready() {
            return;
        }
        if !self.scroll.observe(metrics) {
            return;
        }
        if !self.gate.try_acquire() {
            return;
        }
        self.preloader.show();
        self.pending = Some(
            self.client
                .dispatch(SearchQuery::new(self.search_text.clone()), SearchKind::Append),
        );
    }

    /// Settle the in-flight request if it has finished.
    ///
    /// The preloader is hidden and the gate released exactly once per settled
    /// request, before the outcome is applied, on success and failure alike.
    /// A failure leaves the table untouched. Returns whether anything
    /// settled, so the frame loop knows to repaint.
    pub fn poll_pending(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        let Some((kind, outcome)) = pending.try_settle() else {
            return false;
        };
        self.pending = None;
        self.preloader.hide();
        self.gate.release();

        match outcome {
            Ok(response) => {
                if kind == SearchKind::Replace {
                    self.rows.clear();
                }
                let before = self.rows.len();
                self.rows.extend(response.result);
                if self.rows.len() > self.max_rows {
                    self.rows.truncate(self.max_rows);
                }
                if self.rows.len() > before {
                    self.scroll.rearm();
                }
                tracing::debug!(kind = ?kind, rows = self.rows.len(), "search settled");
            }
            Err(e) => {
                tracing::error!(error = %e, "search request failed");
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn gate(&self) -> &RequestGate {
        &self.gate
    }

    /// The value the current results belong to, for the status bar.
    pub fn last_searched(&self) -> &str {
        self.input.last_seen()
    }

    /// When the trailing-edge debounce next needs a frame.
    pub fn next_input_deadline(&self) -> Option<Instant> {
        self.input.next_deadline()
    }
}

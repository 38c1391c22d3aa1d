//! Debounced query scheduling
//!
//! The original cancel-and-restart timer, re-expressed as an explicit
//! state machine over caller-supplied instants. At most one `Pending`
//! cycle exists at any moment, so a stale deadline can never fire with
//! superseded text - resubmission replaces the pending state outright.
//! Time never comes from inside the machine, which makes the collapsing
//! guarantee testable without sleeping.

use std::time::{Duration, Instant};

/// Scheduler states. `Pending` holds the only live debounce cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceState {
    /// No query waiting
    Idle,
    /// Debounce window open; fires with `text` once `deadline` passes
    Pending { text: String, deadline: Instant },
    /// Session closed; terminal, all input ignored
    Closed,
}

/// Debounce timer for query submissions.
#[derive(Debug)]
pub struct DebounceScheduler {
    state: DebounceState,
    window: Duration,
}

impl DebounceScheduler {
    pub fn new(window: Duration) -> Self {
        Self {
            state: DebounceState::Idle,
            window,
        }
    }

    /// Start or restart the debounce window with `text`.
    ///
    /// A submission during `Pending` cancels the prior cycle; only the
    /// latest text survives. Ignored after `close`.
    pub fn submit(&mut self, text: String, now: Instant) {
        if self.is_closed() {
            return;
        }
        self.state = DebounceState::Pending {
            text,
            deadline: now + self.window,
        };
    }

    /// Cancel any pending cycle without closing the scheduler.
    pub fn cancel(&mut self) {
        if !self.is_closed() {
            self.state = DebounceState::Idle;
        }
    }

    /// Fire the pending cycle if its deadline has passed, returning the
    /// query text to execute and falling back to `Idle`.
    pub fn fire_due(&mut self, now: Instant) -> Option<String> {
        let due = matches!(&self.state, DebounceState::Pending { deadline, .. } if now >= *deadline);
        if !due {
            return None;
        }
        self.take_pending()
    }

    /// Fire the pending cycle immediately, ignoring the deadline.
    /// For synchronous consumers that have no event loop to poll from.
    pub fn flush(&mut self) -> Option<String> {
        if !matches!(self.state, DebounceState::Pending { .. }) {
            return None;
        }
        self.take_pending()
    }

    /// Terminal transition: drops any pending cycle, all further
    /// submissions and polls are no-ops.
    pub fn close(&mut self) {
        self.state = DebounceState::Closed;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, DebounceState::Closed)
    }

    fn take_pending(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.state, DebounceState::Idle) {
            DebounceState::Pending { text, .. } => Some(text),
            other => {
                self.state = other;
                None
            }
        }
    }
}

// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edit session: the two-phase interaction state machine behind a crop
//! view.
//!
//! A session is [`EditPhase::Idle`] until a gesture starts, then
//! [`EditPhase::Editing`] until the settle delay elapses after the last
//! gesture ends. Transitions are reported exactly once, so callers can key
//! presentation changes (dimming chrome, recentering content) off them.
//!
//! ## Usage
//!
//! 1) Call [`EditSession::begin`] when a gesture starts. Any pending settle
//!    is cancelled.
//! 2) Call [`EditSession::end`] when the gesture (including its momentum)
//!    finishes. This arms the settle timer.
//! 3) Call [`EditSession::poll`] from the host's frame or timer callback.
//!    Once the delay elapses it reports [`EditTransition::Settled`].
//!
//! ## Minimal example
//!
//! ```
//! use cropframe_edit_state::session::{EditSession, EditTransition};
//!
//! let mut session = EditSession::default();
//!
//! // A pan starts; a second gesture joining changes nothing.
//! assert_eq!(session.begin(), Some(EditTransition::Began));
//! assert_eq!(session.begin(), None);
//!
//! // The gesture ends at t = 1000ms and settles 800ms later.
//! session.end(1000);
//! assert_eq!(session.poll(1500), None);
//! assert_eq!(session.poll(1800), Some(EditTransition::Settled));
//! assert!(!session.is_editing());
//! ```

use crate::settle::SettleTimer;

/// Interaction phase of a crop view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditPhase {
    /// No gesture in flight and nothing pending.
    #[default]
    Idle,
    /// A gesture is in flight, or ended recently enough that the view has
    /// not settled yet.
    Editing,
}

/// A phase change reported by [`EditSession::begin`] or
/// [`EditSession::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTransition {
    /// The session left [`EditPhase::Idle`] for [`EditPhase::Editing`].
    Began,
    /// The settle delay elapsed and the session returned to
    /// [`EditPhase::Idle`].
    Settled,
}

/// Tracks the editing phase and the settle timer together.
#[derive(Debug, Clone, Copy)]
pub struct EditSession {
    phase: EditPhase,
    timer: SettleTimer,
}

impl EditSession {
    /// Creates an idle session with the given settle delay.
    pub fn new(settle_delay_ms: u64) -> Self {
        Self {
            phase: EditPhase::Idle,
            timer: SettleTimer::new(settle_delay_ms),
        }
    }

    /// The current phase.
    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    /// Returns `true` while a gesture is in flight or pending settle.
    pub fn is_editing(&self) -> bool {
        self.phase == EditPhase::Editing
    }

    /// The pending settle deadline in milliseconds, if armed.
    pub fn settle_deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    /// A gesture started. Cancels any pending settle.
    ///
    /// Returns [`EditTransition::Began`] when this actually left the idle
    /// phase; a gesture starting while already editing reports nothing.
    pub fn begin(&mut self) -> Option<EditTransition> {
        self.timer.cancel();
        if self.phase == EditPhase::Editing {
            return None;
        }
        self.phase = EditPhase::Editing;
        Some(EditTransition::Began)
    }

    /// A gesture ended at `now_ms`. Arms the settle timer.
    ///
    /// Arming is idempotent while a deadline is already pending, so a drag
    /// handoff into deceleration keeps the first deadline.
    pub fn end(&mut self, now_ms: u64) {
        self.timer.arm(now_ms);
    }

    /// Advance time to `now_ms`.
    ///
    /// Reports [`EditTransition::Settled`] once when the settle deadline
    /// has passed while editing. A deadline elapsing in the idle phase is
    /// consumed silently.
    pub fn poll(&mut self, now_ms: u64) -> Option<EditTransition> {
        if !self.timer.poll(now_ms) {
            return None;
        }
        if self.phase == EditPhase::Idle {
            return None;
        }
        self.phase = EditPhase::Idle;
        Some(EditTransition::Settled)
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(crate::settle::SETTLE_DELAY_MS)
    }
}

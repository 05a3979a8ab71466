// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settle timer: a one-shot deadline that fires once an interaction has
//! stayed quiet for a fixed delay.
//!
//! The timer is host-agnostic. Callers pass monotonic timestamps in
//! milliseconds into [`SettleTimer::arm`] and [`SettleTimer::poll`]; no
//! clock is read here.
//!
//! ## Minimal example
//!
//! ```
//! use cropframe_edit_state::settle::SettleTimer;
//!
//! let mut timer = SettleTimer::default();
//!
//! // A gesture ends at t = 1000ms.
//! timer.arm(1000);
//! assert!(timer.is_armed());
//!
//! // Nothing happens until the delay has fully elapsed.
//! assert!(!timer.poll(1799));
//! assert!(timer.poll(1800));
//!
//! // The timer fires exactly once.
//! assert!(!timer.poll(1900));
//! ```

/// Milliseconds an interaction must stay quiet before the view settles back
/// to its resting presentation.
pub const SETTLE_DELAY_MS: u64 = 800;

/// One-shot deadline timer driven by caller-provided timestamps.
#[derive(Debug, Clone, Copy)]
pub struct SettleTimer {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl SettleTimer {
    /// Creates a disarmed timer with the given delay.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Arm the timer at `now_ms`.
    ///
    /// Arming an already armed timer is a no-op: the earlier deadline
    /// stands. Re-arming after a cancel or a fire starts a fresh delay.
    pub fn arm(&mut self, now_ms: u64) {
        if self.deadline.is_none() {
            self.deadline = Some(now_ms + self.delay_ms);
        }
    }

    /// Disarm the timer without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline in milliseconds, if armed.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Fire the timer if `now_ms` has reached the deadline.
    ///
    /// Returns `true` at most once per arming; firing disarms the timer.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for SettleTimer {
    fn default() -> Self {
        Self::new(SETTLE_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_disarmed() {
        let mut timer = SettleTimer::default();
        assert!(!timer.is_armed());
        assert_eq!(timer.deadline(), None);
        assert!(!timer.poll(10_000));
    }

    #[test]
    fn arm_keeps_the_earlier_deadline() {
        let mut timer = SettleTimer::default();
        timer.arm(1000);
        timer.arm(1500);

        assert_eq!(timer.deadline(), Some(1800));
        assert!(timer.poll(1800));
    }

    #[test]
    fn cancel_clears_a_pending_deadline() {
        let mut timer = SettleTimer::default();
        timer.arm(1000);
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.poll(5000));
    }

    #[test]
    fn rearming_after_a_fire_starts_over() {
        let mut timer = SettleTimer::new(100);
        timer.arm(0);
        assert!(timer.poll(100));

        timer.arm(200);
        assert!(!timer.poll(250));
        assert!(timer.poll(300));
    }

    #[test]
    fn poll_fires_on_the_exact_deadline() {
        let mut timer = SettleTimer::new(800);
        timer.arm(1000);

        assert!(!timer.poll(1799));
        assert!(timer.poll(1800));
        assert!(!timer.is_armed());
    }
}

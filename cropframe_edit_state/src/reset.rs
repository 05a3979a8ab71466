// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reset availability: whether the view has drifted from its fitted state.
//!
//! A crop view offers a "reset" affordance only while the selection differs
//! from the state the image was originally fitted into. This watch keeps
//! the reference offset, recomputes the predicate on demand, and reports
//! availability *changes* so hosts only hear about actual flips.
//!
//! ## Minimal example
//!
//! ```
//! use cropframe_edit_state::reset::ResetWatch;
//! use cropframe_geometry::ZoomState;
//! use kurbo::Vec2;
//!
//! let mut reset = ResetWatch::default();
//! reset.rebase(Vec2::new(0.0, -14.0));
//!
//! // A gesture starting makes the affordance available immediately.
//! assert_eq!(reset.force_resettable(), Some(true));
//! assert_eq!(reset.force_resettable(), None);
//!
//! // Settling back at the fitted state withdraws it.
//! let zoom = ZoomState::at_minimum(0.25, 12.0);
//! assert_eq!(reset.update(zoom, Vec2::new(0.0, -14.0)), Some(false));
//! assert!(!reset.can_reset());
//! ```

use cropframe_geometry::{ZoomState, has_drifted};
use kurbo::Vec2;

/// Tracks whether resetting to the fitted state would change anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetWatch {
    can_reset: bool,
    original_offset: Vec2,
}

impl ResetWatch {
    /// Creates a watch with reset unavailable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the content offset of a freshly fitted image as the
    /// reference state.
    ///
    /// This does not report a change by itself; the next [`update`] call
    /// re-evaluates against the new reference.
    ///
    /// [`update`]: ResetWatch::update
    pub fn rebase(&mut self, original_offset: Vec2) {
        self.original_offset = original_offset;
    }

    /// The reference offset captured at the last [`ResetWatch::rebase`].
    pub fn original_offset(&self) -> Vec2 {
        self.original_offset
    }

    /// Whether the reset affordance is currently available.
    pub fn can_reset(&self) -> bool {
        self.can_reset
    }

    /// Make reset available unconditionally, as a starting gesture does.
    ///
    /// Returns `Some(true)` when this flipped availability on, `None` when
    /// it was already on.
    pub fn force_resettable(&mut self) -> Option<bool> {
        if self.can_reset {
            return None;
        }
        self.can_reset = true;
        Some(true)
    }

    /// Recompute availability from the current zoom and offset.
    ///
    /// Drift means the zoom sits above its minimum or the floored offset
    /// differs from the floored reference. Returns the new availability
    /// when it flipped, `None` when it is unchanged.
    pub fn update(&mut self, zoom: ZoomState, content_offset: Vec2) -> Option<bool> {
        let can_reset = has_drifted(zoom, content_offset, self.original_offset);
        if can_reset == self.can_reset {
            return None;
        }
        self.can_reset = can_reset;
        Some(can_reset)
    }
}

// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Suggested duration for hiding the translucency overlay when editing
/// starts, in milliseconds.
pub const TRANSLUCENCY_HIDE_MS: u64 = 50;

/// Suggested duration for restoring the translucency overlay after a
/// settle, in milliseconds.
pub const TRANSLUCENCY_RESTORE_MS: u64 = 350;

/// Suggested delay before the translucency restore begins, in
/// milliseconds.
pub const TRANSLUCENCY_RESTORE_DELAY_MS: u64 = 350;

/// Suggested duration for the bottom image cross-fade, in milliseconds.
pub const BOTTOM_IMAGE_FADE_MS: u64 = 500;

/// A change the hosting adapter needs to apply to its presentation.
///
/// Events are buffered on the [`CropView`] and drained with
/// [`CropView::take_events`]. They carry only final state; `animated`
/// asks the host to interpolate toward it. Live gesture inputs
/// ([`CropView::pan_to`], [`CropView::zoom_to`]) do not emit events, since
/// the adapter already knows what it fed in.
///
/// [`CropView`]: crate::CropView
/// [`CropView::take_events`]: crate::CropView::take_events
/// [`CropView::pan_to`]: crate::CropView::pan_to
/// [`CropView::zoom_to`]: crate::CropView::zoom_to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CropViewEvent {
    /// The crop box, zoom, offset, content size, or scroll insets changed
    /// on the model's initiative. Re-read them from the view.
    GeometryChanged {
        /// Whether the host should animate toward the new state.
        animated: bool,
    },
    /// The translucency overlay outside the crop box should show or hide.
    ///
    /// It hides when editing begins ([`TRANSLUCENCY_HIDE_MS`]) and comes
    /// back once the view settles ([`TRANSLUCENCY_RESTORE_MS`] after
    /// [`TRANSLUCENCY_RESTORE_DELAY_MS`]).
    TranslucencyChanged {
        /// Whether the overlay should be visible.
        visible: bool,
        /// Whether the host should animate the toggle.
        animated: bool,
    },
    /// Whether resetting to the fitted state would change anything.
    ResetAvailabilityChanged {
        /// New availability of the reset affordance.
        can_reset: bool,
    },
    /// The bottom image of the foreground/background pair should show or
    /// hide ([`BOTTOM_IMAGE_FADE_MS`] when animated).
    BottomImageHiddenChanged {
        /// Whether the bottom image should be hidden.
        hidden: bool,
        /// Whether the host should animate the toggle.
        animated: bool,
    },
}

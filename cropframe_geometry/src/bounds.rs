// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content bounds, scroll insets, and the settled-state offset clamp.
//!
//! All rectangles here live in view-local coordinates. The content bounds
//! are the region inside the fixed crop padding and any caller-supplied
//! insets (for toolbars or safe areas); the crop box is always kept inside
//! them.

use kurbo::{Insets, Rect, Size, Vec2};

/// Returns the region available to the crop box: the view bounds shrunk by
/// `padding` on every edge plus the per-edge `region_insets`.
#[must_use]
pub fn content_bounds(view_bounds: Rect, padding: f64, region_insets: Insets) -> Rect {
    Rect::new(
        view_bounds.x0 + padding + region_insets.x0,
        view_bounds.y0 + padding + region_insets.y0,
        view_bounds.x1 - padding - region_insets.x1,
        view_bounds.y1 - padding - region_insets.y1,
    )
}

/// Returns the scroll insets implied by a crop box: the distance from each
/// view edge to the matching crop box edge.
///
/// Applying these to the host scroll region is what lets every image edge
/// be dragged all the way to the crop box edge.
#[must_use]
pub fn scroll_insets(crop_box: Rect, view_bounds: Rect) -> Insets {
    Insets {
        x0: crop_box.x0 - view_bounds.x0,
        y0: crop_box.y0 - view_bounds.y0,
        x1: view_bounds.x1 - crop_box.x1,
        y1: view_bounds.y1 - crop_box.y1,
    }
}

/// Clamps a content offset so the crop box shows only actual image content.
///
/// The lower limit aligns the image's minimum edge with the crop box's
/// minimum edge; the upper limit aligns the maximum edges. Live gestures may
/// report offsets outside this range (hosts rubber-band past the edges);
/// every offset the model computes itself goes through here.
#[must_use]
pub fn clamp_content_offset(offset: Vec2, crop_box: Rect, content_size: Size) -> Vec2 {
    Vec2::new(
        offset
            .x
            .max(-crop_box.x0)
            .min(content_size.width - crop_box.x1),
        offset
            .y
            .max(-crop_box.y0)
            .min(content_size.height - crop_box.y1),
    )
}

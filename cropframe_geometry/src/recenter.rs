// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil`
use kurbo::{Rect, Size, Vec2};

use crate::zoom::ZoomState;

/// Result of recentering the crop content after an interaction settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Recentered {
    /// Crop box scaled up to exactly fit the content bounds, re-centered.
    pub crop_box: Rect,
    /// Offset keeping the previous content focus under the box center.
    pub content_offset: Vec2,
}

/// Scales the crop box back up to the content bounds and recomputes the
/// offset so the content under the box center stays put.
///
/// The box grows by the smaller bounds-to-box axis ratio (1.0 whenever the
/// box already inscribes the bounds, which is every settled state), with
/// ceiled size and a ceiled centering. The offset follows the focus point
/// through that scale, clamped so the box's minimum edges never pass the
/// image; the matching maximum-edge clamp is skipped while the zoom sits at
/// its maximum, where snapping the offset back would be visible.
///
/// A degenerate crop box is returned unchanged.
#[must_use]
pub fn recenter(
    crop_box: Rect,
    content_bounds: Rect,
    content_offset: Vec2,
    content_size: Size,
    zoom: ZoomState,
) -> Recentered {
    if crop_box.width() < f64::EPSILON || crop_box.height() < f64::EPSILON {
        return Recentered {
            crop_box,
            content_offset,
        };
    }

    let scale = (content_bounds.width() / crop_box.width())
        .min(content_bounds.height() / crop_box.height());
    let focus = crop_box.center();
    let mid = content_bounds.center();

    let size = Size::new(
        (crop_box.width() * scale).ceil(),
        (crop_box.height() * scale).ceil(),
    );
    let grown = Rect::from_origin_size(
        (
            content_bounds.x0 + ((content_bounds.width() - size.width) * 0.5).ceil(),
            content_bounds.y0 + ((content_bounds.height() - size.height) * 0.5).ceil(),
        ),
        size,
    );

    let target = Vec2::new(
        (focus.x + content_offset.x) * scale,
        (focus.y + content_offset.y) * scale,
    );
    let mut offset = Vec2::new(target.x - mid.x, target.y - mid.y);

    offset.x = offset.x.max(-grown.x0);
    offset.y = offset.y.max(-grown.y0);
    if !zoom.is_at_maximum() {
        offset.x = offset.x.min(content_size.width - grown.x1);
        offset.y = offset.y.min(content_size.height - grown.y1);
    }

    Recentered {
        crop_box: grown,
        content_offset: offset,
    }
}

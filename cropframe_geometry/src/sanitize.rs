// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`, `ceil`
use kurbo::Rect;

/// Sanitizes a proposed crop box against the content bounds.
///
/// Returns `None` when the proposal is unusable (`NaN` or a sub-epsilon
/// dimension); callers keep their prior box. Otherwise the origin is pulled
/// inside the ceiled bounds origin (shaving the overlap off the size), the
/// origin is floored, the size is floored against the remaining room to the
/// far bounds edge, and finally both dimensions are raised to
/// `minimum_box_size`.
///
/// The result is a fixed point: sanitizing a sanitized box returns it
/// unchanged.
#[must_use]
pub fn clamp_crop_box(proposed: Rect, content_bounds: Rect, minimum_box_size: f64) -> Option<Rect> {
    let mut origin = proposed.origin();
    let mut size = proposed.size();

    if size.width.is_nan() || size.height.is_nan() {
        return None;
    }
    if size.width < f64::EPSILON || size.height < f64::EPSILON {
        return None;
    }

    let x_origin = content_bounds.x0.ceil();
    let x_delta = origin.x - x_origin;
    origin.x = origin.x.max(x_origin).floor();
    if x_delta < -f64::EPSILON {
        size.width += x_delta;
    }

    let y_origin = content_bounds.y0.ceil();
    let y_delta = origin.y - y_origin;
    origin.y = origin.y.max(y_origin).floor();
    if y_delta < -f64::EPSILON {
        size.height += y_delta;
    }

    let max_width = content_bounds.x1 - origin.x;
    size.width = size.width.min(max_width).floor();
    let max_height = content_bounds.y1 - origin.y;
    size.height = size.height.min(max_height).floor();

    size.width = size.width.max(minimum_box_size);
    size.height = size.height.max(minimum_box_size);

    Some(Rect::from_origin_size(origin, size))
}

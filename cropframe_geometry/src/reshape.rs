// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Rect, Size, Vec2};

/// Result of reshaping the crop box for a new aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectReshape {
    /// Reshaped crop box, before sanitizing.
    pub crop_box: Rect,
    /// Offset adjusted so the reshaped box keeps its content centered.
    pub content_offset: Vec2,
    /// True when the reshaped box no longer fits under the current zoom and
    /// the caller must fall back to the minimum zoom.
    pub zoom_out_required: bool,
}

/// Reshapes the crop box so its sides match `new_ratio`.
///
/// One dimension is recomputed from the other. For a 1:1 ratio the width is
/// the recomputed side when the image is wider than tall; for any other
/// ratio the width is recomputed when the new ratio's width is smaller than
/// the *previous* ratio's height, a quirk kept for compatibility (so
/// switching between the stock portrait and landscape shapes adjusts the
/// axis users expect). The adjusted axis is re-centered through the offset;
/// when the recomputation leaves the box size unchanged or grows it, the
/// origin on that axis snaps to the content bounds origin so the sanitizer
/// will not shave the box.
///
/// If the recomputed dimension overruns the content bounds, both dimensions
/// shrink proportionally to fit (again offset-compensated) and
/// `zoom_out_required` is set: the current zoom cannot satisfy the larger
/// minimum implied by the new box.
#[must_use]
pub fn reshape_for_aspect_ratio(
    crop_box: Rect,
    content_offset: Vec2,
    new_ratio: Size,
    previous_ratio: Size,
    image_size: Size,
    content_bounds: Rect,
) -> AspectReshape {
    let mut origin = crop_box.origin();
    let mut size = crop_box.size();
    let mut offset = content_offset;
    let mut zoom_out_required = false;

    let adjusts_width = if new_ratio.width == 1.0 && new_ratio.height == 1.0 {
        image_size.width > image_size.height
    } else {
        new_ratio.width < previous_ratio.height
    };

    if adjusts_width {
        let new_width = (size.height * new_ratio.width / new_ratio.height).floor();
        let delta = size.width - new_width;
        size.width = new_width;
        offset.x += delta * 0.5;

        if delta < f64::EPSILON {
            origin.x = content_bounds.x0;
        }

        if new_width > content_bounds.width() {
            let scale = content_bounds.width() / new_width;
            let new_height = size.height * scale;
            offset.y += (size.height - new_height) * 0.5;
            size.height = new_height;
            size.width = content_bounds.width();
            zoom_out_required = true;
        }
    } else {
        let new_height = (size.width * new_ratio.height / new_ratio.width).floor();
        let delta = size.height - new_height;
        size.height = new_height;
        offset.y += delta * 0.5;

        if delta < f64::EPSILON {
            origin.y = content_bounds.y0;
        }

        if new_height > content_bounds.height() {
            let scale = content_bounds.height() / new_height;
            let new_width = size.width * scale;
            offset.x += (size.width - new_width) * 0.5;
            size.width = new_width;
            size.height = content_bounds.height();
            zoom_out_required = true;
        }
    }

    AspectReshape {
        crop_box: Rect::from_origin_size(origin, size),
        content_offset: offset,
        zoom_out_required,
    }
}

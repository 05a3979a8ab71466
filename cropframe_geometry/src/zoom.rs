// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Size, Vec2};

/// Zoom scale together with its permitted range.
///
/// `minimum` is the scale at which the image exactly fills the crop box; it
/// moves whenever the crop box is reassigned. `maximum` is fixed when the
/// image is first fitted and does not follow later minimum adjustments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    /// Current scale from image space into content space.
    pub current: f64,
    /// Scale at which the image exactly fills the crop box.
    pub minimum: f64,
    /// Largest permitted scale.
    pub maximum: f64,
}

impl ZoomState {
    /// Creates a zoom state resting at `minimum`, with the maximum derived
    /// from it by `maximum_zoom_factor`.
    #[must_use]
    pub fn at_minimum(minimum: f64, maximum_zoom_factor: f64) -> Self {
        Self {
            current: minimum,
            minimum,
            maximum: minimum * maximum_zoom_factor,
        }
    }

    /// Returns `scale` clamped into the permitted range.
    ///
    /// A `NaN` scale resolves to the minimum.
    #[must_use]
    pub fn clamped(&self, scale: f64) -> f64 {
        scale.max(self.minimum).min(self.maximum)
    }

    /// Whether the current scale is within an epsilon of the maximum.
    #[must_use]
    pub fn is_at_maximum(&self) -> bool {
        self.current >= self.maximum - f64::EPSILON
    }

    /// Replaces the minimum scale and re-clamps the current scale into the
    /// updated range. The maximum is left untouched.
    pub fn set_minimum(&mut self, minimum: f64) {
        self.minimum = minimum;
        self.current = self.clamped(self.current);
    }
}

/// Returns the smallest zoom at which `image_size` still covers a crop box
/// of `crop_box_size`.
#[must_use]
pub fn minimum_zoom_for_crop_box(crop_box_size: Size, image_size: Size) -> f64 {
    (crop_box_size.height / image_size.height).max(crop_box_size.width / image_size.width)
}

/// Returns the zoomed image extent, floored to whole points per axis.
#[must_use]
pub fn scaled_content_size(image_size: Size, zoom: f64) -> Size {
    Size::new((image_size.width * zoom).floor(), (image_size.height * zoom).floor())
}

/// Whether the view has moved away from its fitted state.
///
/// True when the zoom sits above its minimum (beyond an epsilon) or the
/// floored content offset differs from the floored offset captured when the
/// image was fitted. This is the predicate behind the reset affordance.
#[must_use]
pub fn has_drifted(zoom: ZoomState, content_offset: Vec2, original_offset: Vec2) -> bool {
    if zoom.current > zoom.minimum + f64::EPSILON {
        return true;
    }
    content_offset.x.floor() != original_offset.x.floor()
        || content_offset.y.floor() != original_offset.y.floor()
}

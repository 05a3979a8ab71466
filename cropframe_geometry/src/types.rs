// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Padding between the view edge and the crop region, in points.
pub const CROP_VIEW_PADDING: f64 = 14.0;

/// Smallest width or height the crop box sanitizer will produce, in points.
pub const MINIMUM_BOX_SIZE: f64 = 42.0;

/// Factor applied to the fit zoom to obtain the maximum zoom.
pub const MAXIMUM_ZOOM_FACTOR: f64 = 12.0;

/// Aspect ratio presets offered by a cropping UI.
///
/// Arbitrary ratios are accepted everywhere a ratio is taken; these are the
/// three named shapes a host typically exposes as buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AspectRatioPreset {
    /// 4:5, the portrait default.
    #[default]
    Portrait,
    /// 1:1.
    Square,
    /// 1.91:1, the wide landscape shape.
    Landscape,
}

impl AspectRatioPreset {
    /// Returns the preset as a width:height pair.
    #[must_use]
    pub fn ratio(self) -> Size {
        match self {
            Self::Portrait => Size::new(4.0, 5.0),
            Self::Square => Size::new(1.0, 1.0),
            Self::Landscape => Size::new(1.91, 1.0),
        }
    }
}

/// Tuning values for the crop model.
///
/// The defaults match the classic photo-cropper feel: a 14 point gutter
/// around the crop region, a 42 point minimum box, and a pinch range
/// reaching 12x the fitted zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropMetrics {
    /// Padding between the view edge and the crop region, per edge.
    pub padding: f64,
    /// Minimum crop box width and height.
    pub minimum_box_size: f64,
    /// Maximum zoom, as a multiple of the zoom that fits the image.
    pub maximum_zoom_factor: f64,
}

impl Default for CropMetrics {
    fn default() -> Self {
        Self {
            padding: CROP_VIEW_PADDING,
            minimum_box_size: MINIMUM_BOX_SIZE,
            maximum_zoom_factor: MAXIMUM_ZOOM_FACTOR,
        }
    }
}

/// Resolves a requested width:height ratio against the image's native size.
///
/// A ratio that is zero (or negative, or `NaN`) on *both* axes selects the
/// image's own aspect ratio. A ratio that is degenerate on exactly one axis
/// cannot be used for fitting and yields `None`, which callers treat as
/// "fit the whole image with no ratio constraint".
#[must_use]
pub fn normalize_aspect_ratio(ratio: Size, image_size: Size) -> Option<Size> {
    let usable_w = ratio.width > f64::EPSILON;
    let usable_h = ratio.height > f64::EPSILON;
    if !usable_w && !usable_h {
        return Some(image_size);
    }
    if usable_w && usable_h {
        return Some(ratio);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_expected_ratios() {
        assert_eq!(AspectRatioPreset::Portrait.ratio(), Size::new(4.0, 5.0));
        assert_eq!(AspectRatioPreset::Square.ratio(), Size::new(1.0, 1.0));
        assert_eq!(AspectRatioPreset::Landscape.ratio(), Size::new(1.91, 1.0));
        assert_eq!(AspectRatioPreset::default(), AspectRatioPreset::Portrait);
    }

    #[test]
    fn zero_ratio_resolves_to_image_size() {
        let image = Size::new(1200.0, 1600.0);
        assert_eq!(normalize_aspect_ratio(Size::ZERO, image), Some(image));
        assert_eq!(
            normalize_aspect_ratio(Size::new(f64::NAN, f64::NAN), image),
            Some(image)
        );
    }

    #[test]
    fn positive_ratio_passes_through() {
        let image = Size::new(1200.0, 1600.0);
        let ratio = Size::new(4.0, 5.0);
        assert_eq!(normalize_aspect_ratio(ratio, image), Some(ratio));
    }

    #[test]
    fn half_degenerate_ratio_is_unusable() {
        let image = Size::new(1200.0, 1600.0);
        assert_eq!(normalize_aspect_ratio(Size::new(0.0, 5.0), image), None);
        assert_eq!(normalize_aspect_ratio(Size::new(4.0, 0.0), image), None);
        assert_eq!(normalize_aspect_ratio(Size::new(4.0, f64::NAN), image), None);
    }
}

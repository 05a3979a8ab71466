// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Point, Rect, Size, Vec2};

use crate::zoom::{ZoomState, scaled_content_size};

/// Result of fitting an image into the content bounds for the first time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialFit {
    /// Crop box centered in the content bounds, before sanitizing.
    pub crop_box: Rect,
    /// Zoom resting at the fit scale, with the maximum derived from it.
    pub zoom: ZoomState,
    /// Zoomed image extent at the fit scale.
    pub content_size: Size,
    /// Offset centering the image under the crop box.
    pub content_offset: Vec2,
}

/// Fits `image_size` into `content_bounds` and derives the starting crop
/// state.
///
/// Without a ratio, the fit scale letterboxes the whole image into the
/// content bounds and the crop box wraps the scaled image exactly. With a
/// ratio, the crop box is the largest `aspect_ratio`-shaped rectangle that
/// fits the content bounds, and the fit scale grows to the aspect-*fill*
/// scale of the image into that box, so the box never shows blank space.
///
/// The crop box is centered with floored coordinates and inscribes the
/// content bounds exactly on at least one axis. When the scaled image is
/// larger than the box on an axis, the returned offset centers the image
/// under the box.
#[must_use]
pub fn fit_initial_crop_box(
    image_size: Size,
    content_bounds: Rect,
    aspect_ratio: Option<Size>,
    maximum_zoom_factor: f64,
) -> InitialFit {
    let bounds_size = content_bounds.size();

    let mut scale = (bounds_size.width / image_size.width).min(bounds_size.height / image_size.height);

    let mut crop_box_size = Size::ZERO;
    if let Some(ratio) = aspect_ratio {
        let ratio_scale = ratio.width / ratio.height;
        let full_size_ratio = Size::new(bounds_size.height * ratio_scale, bounds_size.height);
        let fit_scale = (bounds_size.width / full_size_ratio.width)
            .min(bounds_size.height / full_size_ratio.height);
        crop_box_size = Size::new(
            full_size_ratio.width * fit_scale,
            full_size_ratio.height * fit_scale,
        );
        scale = (crop_box_size.width / image_size.width).max(crop_box_size.height / image_size.height);
    }

    let scaled_size = scaled_content_size(image_size, scale);

    let box_size = if aspect_ratio.is_some() {
        crop_box_size
    } else {
        scaled_size
    };
    let origin = Point::new(
        (content_bounds.x0 + ((bounds_size.width - box_size.width) * 0.5).floor()).floor(),
        (content_bounds.y0 + ((bounds_size.height - box_size.height) * 0.5).floor()).floor(),
    );
    let crop_box = Rect::from_origin_size(origin, box_size);

    let mut content_offset = Vec2::ZERO;
    if crop_box.width() < scaled_size.width - f64::EPSILON
        || crop_box.height() < scaled_size.height - f64::EPSILON
    {
        let center = content_bounds.center();
        content_offset = Vec2::new(
            -(center.x - scaled_size.width * 0.5).floor(),
            -(center.y - scaled_size.height * 0.5).floor(),
        );
    }

    InitialFit {
        crop_box,
        zoom: ZoomState::at_minimum(scale, maximum_zoom_factor),
        content_size: scaled_size,
        content_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_ratio_fit_matches_reference_numbers() {
        // 1200x1600 image into 300x400 bounds with a 4:5 ratio.
        let fit = fit_initial_crop_box(
            Size::new(1200.0, 1600.0),
            Rect::new(0.0, 0.0, 300.0, 400.0),
            Some(Size::new(4.0, 5.0)),
            12.0,
        );
        assert_eq!(fit.crop_box, Rect::new(0.0, 12.0, 300.0, 387.0));
        assert_eq!(fit.zoom.minimum, 0.25);
        assert_eq!(fit.zoom.current, 0.25);
        assert_eq!(fit.zoom.maximum, 3.0);
        assert_eq!(fit.content_size, Size::new(300.0, 400.0));
        assert_eq!(fit.content_offset, Vec2::ZERO);
    }

    #[test]
    fn fit_without_ratio_wraps_the_scaled_image() {
        let fit = fit_initial_crop_box(
            Size::new(1600.0, 1200.0),
            Rect::new(0.0, 0.0, 400.0, 400.0),
            None,
            12.0,
        );
        // Letterbox scale is 0.25, so the scaled image is 400x300.
        assert_eq!(fit.content_size, Size::new(400.0, 300.0));
        assert_eq!(fit.crop_box.size(), Size::new(400.0, 300.0));
        assert_eq!(fit.crop_box.origin(), Point::new(0.0, 50.0));
        assert_eq!(fit.content_offset, Vec2::ZERO);
    }

    #[test]
    fn box_inscribes_bounds_on_one_axis() {
        let bounds = Rect::new(14.0, 14.0, 314.0, 414.0);
        let fit = fit_initial_crop_box(
            Size::new(1200.0, 1600.0),
            bounds,
            Some(Size::new(1.0, 1.0)),
            12.0,
        );
        // A square box in 300x400 bounds spans the full width.
        assert_eq!(fit.crop_box.width(), 300.0);
        assert_eq!(fit.crop_box.height(), 300.0);
        assert!(fit.crop_box.x0 >= bounds.x0);
        assert!(fit.crop_box.y0 >= bounds.y0);
    }

    #[test]
    fn offset_centers_overflowing_axes() {
        // Square ratio over a portrait image: the scaled image is taller
        // than the square box, so the vertical overflow is split evenly.
        let fit = fit_initial_crop_box(
            Size::new(1200.0, 1600.0),
            Rect::new(0.0, 0.0, 300.0, 400.0),
            Some(Size::new(1.0, 1.0)),
            12.0,
        );
        assert_eq!(fit.crop_box.size(), Size::new(300.0, 300.0));
        assert_eq!(fit.content_size, Size::new(300.0, 400.0));
        // Image center (150, 200) under bounds center (150, 200).
        assert_eq!(fit.content_offset, Vec2::ZERO);

        // A very wide image leaves real horizontal overflow; the offset
        // splits it so the image sits centered under the box.
        let fit = fit_initial_crop_box(
            Size::new(2000.0, 1200.0),
            Rect::new(0.0, 0.0, 400.0, 300.0),
            Some(Size::new(1.0, 1.0)),
            12.0,
        );
        assert_eq!(fit.crop_box, Rect::new(50.0, 0.0, 350.0, 300.0));
        assert_eq!(fit.content_size, Size::new(500.0, 300.0));
        assert_eq!(fit.content_offset, Vec2::new(50.0, 0.0));
        // Margin visible on each side of the box: (500 - 300) / 2.
        assert_eq!(fit.content_offset.x + fit.crop_box.x0, 100.0);
    }
}

// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between the on-screen crop state and image pixel coordinates.
//!
//! [`image_crop_frame`] reads the current selection out as a rectangle in
//! image pixels; [`apply_image_crop_frame`] derives the zoom, crop box, and
//! offset that bring a saved rectangle back on screen.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`, `ceil`
use kurbo::{Insets, Point, Rect, Size, Vec2};

/// Returns the crop box re-expressed in image pixel coordinates.
///
/// Origins convert through the per-axis content-to-image scale of the
/// floored offset plus the scroll inset; sizes use the smaller of the two
/// axis scales and round up. Both are clamped into the image. When the crop
/// box is square to the floored point, the output height is forced equal to
/// the output width so a square selection exports square.
#[must_use]
pub fn image_crop_frame(
    crop_box: Rect,
    content_size: Size,
    image_size: Size,
    content_offset: Vec2,
    content_insets: Insets,
) -> Rect {
    let scale = (image_size.width / content_size.width).min(image_size.height / content_size.height);

    let x = ((content_offset.x.floor() + content_insets.x0)
        * (image_size.width / content_size.width))
        .floor()
        .max(0.0);
    let y = ((content_offset.y.floor() + content_insets.y0)
        * (image_size.height / content_size.height))
        .floor()
        .max(0.0);

    let width = (crop_box.width() * scale).ceil().min(image_size.width);
    let height = if crop_box.width().floor() == crop_box.height().floor() {
        width
    } else {
        (crop_box.height() * scale).ceil().min(image_size.height)
    };
    let height = height.min(image_size.height);

    Rect::from_origin_size(Point::new(x, y), Size::new(width, height))
}

/// Crop state recovered from a saved image crop frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestoredFit {
    /// Zoom that makes the saved selection fill the content bounds.
    pub zoom: f64,
    /// Crop box centered in the content bounds, before sanitizing.
    pub crop_box: Rect,
    /// Offset aligning the saved selection under the crop box.
    pub content_offset: Vec2,
}

/// Derives the on-screen state that shows `target` (an image-space
/// rectangle) inside `content_bounds`.
///
/// The target is first taken down to minimum-zoom content coordinates, then
/// aspect-fitted into the content bounds; the resulting scale on top of the
/// minimum zoom is the restored zoom. The crop box is the scaled target
/// size, floored and centered; the offset lines the scaled target origin up
/// with the crop box edges.
#[must_use]
pub fn apply_image_crop_frame(target: Rect, content_bounds: Rect, minimum_zoom: f64) -> RestoredFit {
    let scaled_offset = Vec2::new(target.x0 * minimum_zoom, target.y0 * minimum_zoom);
    let scaled_crop_size = Size::new(
        target.width() * minimum_zoom,
        target.height() * minimum_zoom,
    );

    let bounds_size = content_bounds.size();
    let scale = (bounds_size.width / scaled_crop_size.width)
        .min(bounds_size.height / scaled_crop_size.height);
    let zoom = minimum_zoom * scale;

    let size = Size::new(
        (scaled_crop_size.width * scale).floor(),
        (scaled_crop_size.height * scale).floor(),
    );
    let center = content_bounds.center();
    let crop_box = Rect::from_origin_size(
        Point::new(
            (center.x - size.width * 0.5).floor(),
            (center.y - size.height * 0.5).floor(),
        ),
        size,
    );

    let content_offset = Vec2::new(
        (scaled_offset.x * scale - crop_box.x0).ceil(),
        (scaled_offset.y * scale - crop_box.y0).ceil(),
    );

    RestoredFit {
        zoom,
        crop_box,
        content_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_matches_reference_numbers() {
        // The fitted 1200x1600 / 300x400 / 4:5 state.
        let frame = image_crop_frame(
            Rect::new(0.0, 12.0, 300.0, 387.0),
            Size::new(300.0, 400.0),
            Size::new(1200.0, 1600.0),
            Vec2::ZERO,
            Insets::new(0.0, 12.0, 0.0, 13.0),
        );
        assert_eq!(frame, Rect::new(0.0, 48.0, 1200.0, 1548.0));
    }

    #[test]
    fn square_box_exports_square() {
        let frame = image_crop_frame(
            Rect::new(0.0, 50.0, 300.0, 350.0),
            Size::new(300.0, 400.0),
            Size::new(1200.0, 1600.0),
            Vec2::ZERO,
            Insets::new(0.0, 50.0, 0.0, 50.0),
        );
        assert_eq!(frame.width(), frame.height());
        assert_eq!(frame.width(), 1200.0);
    }

    #[test]
    fn export_origin_never_goes_negative() {
        // A rubber-banded offset pulled past the top-left corner.
        let frame = image_crop_frame(
            Rect::new(0.0, 12.0, 300.0, 387.0),
            Size::new(300.0, 400.0),
            Size::new(1200.0, 1600.0),
            Vec2::new(-20.0, -30.0),
            Insets::new(0.0, 12.0, 0.0, 13.0),
        );
        assert_eq!(frame.origin(), Point::new(0.0, 0.0));
    }

    #[test]
    fn export_size_clamps_to_image() {
        // A crop box slightly wider than the content maps past the image
        // edge before clamping.
        let frame = image_crop_frame(
            Rect::new(0.0, 0.0, 301.0, 376.0),
            Size::new(300.0, 400.0),
            Size::new(1200.0, 1600.0),
            Vec2::ZERO,
            Insets::ZERO,
        );
        assert_eq!(frame.width(), 1200.0);
    }

    #[test]
    fn restore_reverses_the_fitted_export() {
        let restored = apply_image_crop_frame(
            Rect::new(0.0, 48.0, 1200.0, 1548.0),
            Rect::new(0.0, 0.0, 300.0, 400.0),
            0.25,
        );
        assert_eq!(restored.zoom, 0.25);
        assert_eq!(restored.crop_box, Rect::new(0.0, 12.0, 300.0, 387.0));
        assert_eq!(restored.content_offset, Vec2::ZERO);
    }

    #[test]
    fn restore_then_export_round_trips_a_zoomed_selection() {
        let image = Size::new(1200.0, 1600.0);
        let bounds = Rect::new(0.0, 0.0, 300.0, 400.0);
        let target = Rect::new(300.0, 400.0, 900.0, 1150.0);

        let restored = apply_image_crop_frame(target, bounds, 0.25);
        assert_eq!(restored.zoom, 0.5);
        assert_eq!(restored.crop_box, Rect::new(0.0, 12.0, 300.0, 387.0));
        assert_eq!(restored.content_offset, Vec2::new(150.0, 188.0));

        // Feed the restored state straight back through the export.
        let content_size = Size::new(image.width * restored.zoom, image.height * restored.zoom);
        let insets = Insets::new(
            restored.crop_box.x0,
            restored.crop_box.y0,
            bounds.x1 - restored.crop_box.x1,
            bounds.y1 - restored.crop_box.y1,
        );
        let exported = image_crop_frame(
            restored.crop_box,
            content_size,
            image,
            restored.content_offset,
            insets,
        );
        assert_eq!(exported, target);
    }
}

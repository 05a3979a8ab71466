// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cropframe_geometry --heading-base-level=0

//! Cropframe Geometry: crop-box math for interactive image cropping.
//!
//! This crate provides the pure geometry behind a scroll-view style image
//! cropper, where a fixed crop box floats over pannable, zoomable content.
//! It focuses on:
//! - Fitting an image into padded content bounds, with or without a fixed
//!   aspect ratio.
//! - Mapping the on-screen selection to image pixel coordinates and back.
//! - Reshaping the crop box for a new aspect ratio in place.
//! - Sanitizing proposed crop boxes and clamping content offsets.
//! - Recentering the content after an interaction settles.
//!
//! It does **not** own any view hierarchy, gesture recognition, or
//! animation. Callers are expected to:
//! - Keep their own scroll/render state and feed it through these
//!   functions.
//! - Drive interaction phases at a higher layer (for example with
//!   `cropframe_edit_state`).
//! - Apply the returned rectangles and offsets to whatever actually draws.
//!
//! ## Fitting an image
//!
//! ```rust
//! use cropframe_geometry::{
//!     CROP_VIEW_PADDING, MAXIMUM_ZOOM_FACTOR, content_bounds, fit_initial_crop_box,
//! };
//! use kurbo::{Insets, Rect, Size, Vec2};
//!
//! // A 328x428 view with the standard padding leaves 300x400 of content
//! // bounds.
//! let bounds = content_bounds(
//!     Rect::new(0.0, 0.0, 328.0, 428.0),
//!     CROP_VIEW_PADDING,
//!     Insets::ZERO,
//! );
//! assert_eq!(bounds, Rect::new(14.0, 14.0, 314.0, 414.0));
//!
//! // Fit a 1200x1600 image under a 4:5 portrait crop box.
//! let fit = fit_initial_crop_box(
//!     Size::new(1200.0, 1600.0),
//!     bounds,
//!     Some(Size::new(4.0, 5.0)),
//!     MAXIMUM_ZOOM_FACTOR,
//! );
//! assert_eq!(fit.crop_box, Rect::new(14.0, 26.0, 314.0, 401.0));
//! assert_eq!(fit.zoom.minimum, 0.25);
//! assert_eq!(fit.content_size, Size::new(300.0, 400.0));
//! assert_eq!(fit.content_offset, Vec2::new(-14.0, -14.0));
//! ```
//!
//! ## Exporting and restoring a selection
//!
//! The on-screen state round-trips through image pixel coordinates, so a
//! crop can be saved and reopened later:
//!
//! ```rust
//! use cropframe_geometry::{apply_image_crop_frame, image_crop_frame};
//! use kurbo::{Insets, Rect, Size, Vec2};
//!
//! // The fitted state from the example above, in unpadded bounds.
//! let crop_box = Rect::new(0.0, 12.0, 300.0, 387.0);
//! let exported = image_crop_frame(
//!     crop_box,
//!     Size::new(300.0, 400.0),
//!     Size::new(1200.0, 1600.0),
//!     Vec2::ZERO,
//!     Insets::new(0.0, 12.0, 0.0, 13.0),
//! );
//! assert_eq!(exported, Rect::new(0.0, 48.0, 1200.0, 1548.0));
//!
//! let restored = apply_image_crop_frame(exported, Rect::new(0.0, 0.0, 300.0, 400.0), 0.25);
//! assert_eq!(restored.crop_box, crop_box);
//! assert_eq!(restored.zoom, 0.25);
//! assert_eq!(restored.content_offset, Vec2::ZERO);
//! ```
//!
//! ## Design notes
//!
//! - The crop box lives in view coordinates; the content offset maps view
//!   space into content (zoomed image) space by addition.
//! - Layout-facing values round to whole points with an explicit
//!   floor/ceil discipline, the way pixel-snapping scroll views do, and the
//!   round-trip math depends on it.
//! - [`clamp_crop_box`] is the single authority on crop box validity;
//!   everything else may produce slightly out-of-range boxes and expects
//!   callers to pass them through it.
//! - Near-equality uses [`f64::EPSILON`] directly, matching the point
//!   scales these functions operate at.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod fit;
mod frame;
mod recenter;
mod reshape;
mod sanitize;
mod types;
mod zoom;

pub use bounds::{clamp_content_offset, content_bounds, scroll_insets};
pub use fit::{InitialFit, fit_initial_crop_box};
pub use frame::{RestoredFit, apply_image_crop_frame, image_crop_frame};
pub use recenter::{Recentered, recenter};
pub use reshape::{AspectReshape, reshape_for_aspect_ratio};
pub use sanitize::clamp_crop_box;
pub use types::{
    AspectRatioPreset, CROP_VIEW_PADDING, CropMetrics, MAXIMUM_ZOOM_FACTOR, MINIMUM_BOX_SIZE,
    normalize_aspect_ratio,
};
pub use zoom::{ZoomState, has_drifted, minimum_zoom_for_crop_box, scaled_content_size};

// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cropframe_view --heading-base-level=0

//! Cropframe View: a headless scroll-view style image cropper.
//!
//! This crate ties the pure geometry of `cropframe_geometry` and the
//! interaction state of `cropframe_edit_state` into a single [`CropView`]
//! model: a crop box floating over pannable, zoomable image content. It
//! focuses on:
//! - Fitting an image under a crop box and keeping the box sane.
//! - Tracking gestures, settling afterwards, and recentering the content.
//! - Exporting the selection in image pixels and restoring it later.
//!
//! It does **not** render, recognize gestures, or run timers. Adapters are
//! expected to:
//! - Call [`CropView::layout`] on layout passes and
//!   [`CropView::perform_initial_setup`] once bounds are real.
//! - Map their platform's pan/zoom callbacks onto
//!   [`CropView::begin_interaction`], [`CropView::pan_to`],
//!   [`CropView::zoom_to`], and [`CropView::end_interaction`].
//! - Call [`CropView::tick`] with a monotonic millisecond clock.
//! - Drain [`CropView::take_events`] and apply each [`CropViewEvent`] to
//!   whatever actually draws.
//!
//! ## Minimal example
//!
//! ```rust
//! use cropframe_view::CropView;
//! use kurbo::{Rect, Size, Vec2};
//!
//! let mut view = CropView::new(Size::new(1200.0, 1600.0));
//! view.set_aspect_ratio(Size::new(4.0, 5.0), false);
//!
//! // The host lays the view out at 328x428 and runs the one-time setup.
//! view.layout(Rect::new(0.0, 0.0, 328.0, 428.0));
//! view.perform_initial_setup();
//!
//! assert_eq!(view.crop_box(), Rect::new(14.0, 26.0, 314.0, 401.0));
//! assert_eq!(view.zoom().current, 0.25);
//!
//! // A pan gesture comes and goes; 800ms later the view settles.
//! view.begin_interaction();
//! view.pan_to(Vec2::new(-14.0, -13.0));
//! view.end_interaction(100);
//! view.tick(900);
//! assert!(!view.is_editing());
//! ```
//!
//! ## Saving and reopening a crop
//!
//! ```rust
//! use cropframe_view::CropView;
//! use kurbo::{Rect, Size};
//!
//! let mut view = CropView::new(Size::new(1200.0, 1600.0));
//! view.set_aspect_ratio(Size::new(4.0, 5.0), false);
//!
//! // A frame saved from an earlier session, set before the first layout,
//! // is applied as soon as setup runs.
//! view.set_image_crop_frame(Rect::new(0.0, 48.0, 1200.0, 1548.0));
//! view.layout(Rect::new(0.0, 0.0, 328.0, 428.0));
//! view.perform_initial_setup();
//!
//! assert_eq!(view.image_crop_frame(), Rect::new(0.0, 48.0, 1200.0, 1548.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod crop_view;
mod events;

pub use crop_view::{CropView, CropViewDebugInfo};
pub use events::{
    BOTTOM_IMAGE_FADE_MS, CropViewEvent, TRANSLUCENCY_HIDE_MS, TRANSLUCENCY_RESTORE_DELAY_MS,
    TRANSLUCENCY_RESTORE_MS,
};

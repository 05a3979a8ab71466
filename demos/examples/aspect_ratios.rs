// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cycling the aspect ratio presets.
//!
//! Start from the portrait default, apply each preset in turn, and print the
//! crop box plus the selection it maps to in image pixels.
//!
//! Run:
//! - `cargo run -p cropframe_demos --example aspect_ratios`

use cropframe_geometry::AspectRatioPreset;
use cropframe_view::CropView;
use kurbo::{Rect, Size};

fn main() {
    let mut view = CropView::new(Size::new(1200.0, 1600.0));
    view.set_aspect_ratio(AspectRatioPreset::default().ratio(), false);
    view.layout(Rect::new(0.0, 0.0, 328.0, 428.0));
    view.perform_initial_setup();
    view.take_events();

    for preset in [
        AspectRatioPreset::Square,
        AspectRatioPreset::Landscape,
        AspectRatioPreset::Portrait,
    ] {
        view.set_aspect_ratio(preset.ratio(), false);
        view.take_events();
        println!(
            "{preset:?}: box={:?} -> image frame {:?}",
            view.crop_box(),
            view.image_crop_frame()
        );
    }
}

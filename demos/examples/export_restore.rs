// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Saving a crop and reopening it elsewhere.
//!
//! Make a zoomed selection in one view, export it in image pixels, and
//! restore it into a second view with different bounds.
//!
//! Run:
//! - `cargo run -p cropframe_demos --example export_restore`

use cropframe_view::CropView;
use kurbo::{Rect, Size, Vec2};

fn main() {
    let image = Size::new(1200.0, 1600.0);

    let mut editor = CropView::new(image);
    editor.set_aspect_ratio(Size::new(4.0, 5.0), false);
    editor.layout(Rect::new(0.0, 0.0, 328.0, 428.0));
    editor.perform_initial_setup();

    editor.zoom_to(0.5);
    editor.pan_to(Vec2::new(136.0, 174.0));
    let frame = editor.image_crop_frame();
    println!("saved selection: {frame:?}");

    // A smaller view picks the saved selection up before its first layout
    // and applies it during setup.
    let mut reopened = CropView::new(image);
    reopened.set_image_crop_frame(frame);
    reopened.layout(Rect::new(0.0, 0.0, 178.0, 228.0));
    reopened.perform_initial_setup();

    println!(
        "reopened: zoom={} box={:?} offset={:?}",
        reopened.zoom().current,
        reopened.crop_box(),
        reopened.content_offset()
    );
    println!("round trip: {:?}", reopened.image_crop_frame());
}

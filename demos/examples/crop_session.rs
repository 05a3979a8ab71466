// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full cropping session, narrated.
//!
//! Drive a [`CropView`] through layout, a pan gesture, the settle delay, and
//! a final export, printing the state and the emitted events at each step.
//!
//! Run:
//! - `cargo run -p cropframe_demos --example crop_session`

use cropframe_demos::drain_events;
use cropframe_view::CropView;
use kurbo::{Rect, Size, Vec2};

fn main() {
    let mut view = CropView::new(Size::new(1200.0, 1600.0));
    view.set_aspect_ratio(Size::new(4.0, 5.0), false);

    view.layout(Rect::new(0.0, 0.0, 328.0, 428.0));
    view.perform_initial_setup();
    drain_events(&mut view, "setup");
    println!(
        "fitted: box={:?} zoom={} offset={:?}",
        view.crop_box(),
        view.zoom().current,
        view.content_offset()
    );

    // A pan gesture. The overlay hides while the finger is down, and the
    // model settles 800ms after release.
    view.begin_interaction();
    view.pan_to(Vec2::new(36.0, 86.0));
    view.end_interaction(1_000);
    drain_events(&mut view, "gesture");

    // Nothing happens until the settle deadline passes.
    view.tick(1_500);
    println!("at 1500ms: editing={}", view.is_editing());
    view.tick(1_800);
    drain_events(&mut view, "settle");
    println!(
        "settled: offset={:?} editing={}",
        view.content_offset(),
        view.is_editing()
    );

    // The selection, expressed in image pixels.
    println!("image crop frame: {:?}", view.image_crop_frame());
}

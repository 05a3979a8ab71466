// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the cropframe demos.

use cropframe_view::CropView;

/// Prints and clears the view's pending events, tagged with `label`.
pub fn drain_events(view: &mut CropView, label: &str) {
    for event in view.take_events() {
        println!("  [{label}] {event:?}");
    }
}

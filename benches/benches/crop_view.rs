// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end benchmarks for `cropframe_view` host sequences.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};

use cropframe_view::CropView;

const IMAGE: Size = Size::new(1200.0, 1600.0);
const VIEW: Rect = Rect::new(0.0, 0.0, 328.0, 428.0);

fn fitted_portrait() -> CropView {
    let mut view = CropView::new(IMAGE);
    view.set_aspect_ratio(Size::new(4.0, 5.0), false);
    view.layout(VIEW);
    view.perform_initial_setup();
    view.take_events();
    view
}

fn bench_setup(c: &mut Criterion) {
    c.bench_function("view/setup", |b| {
        b.iter_batched(
            || CropView::new(IMAGE),
            |mut view| {
                view.set_aspect_ratio(Size::new(4.0, 5.0), false);
                view.layout(VIEW);
                view.perform_initial_setup();
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_gesture_settle(c: &mut Criterion) {
    let fitted = fitted_portrait();

    c.bench_function("view/gesture_settle", |b| {
        b.iter_batched(
            || fitted.clone(),
            |mut view| {
                view.begin_interaction();
                view.pan_to(Vec2::new(36.0, 86.0));
                view.end_interaction(0);
                view.tick(800);
                black_box(view.take_events());
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_aspect_cycle(c: &mut Criterion) {
    let fitted = fitted_portrait();

    c.bench_function("view/aspect_cycle", |b| {
        b.iter_batched(
            || fitted.clone(),
            |mut view| {
                view.set_aspect_ratio(Size::new(1.0, 1.0), false);
                view.set_aspect_ratio(Size::new(1.91, 1.0), false);
                view.set_aspect_ratio(Size::new(4.0, 5.0), false);
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_export_restore(c: &mut Criterion) {
    let mut edited = fitted_portrait();
    edited.zoom_to(0.5);
    edited.pan_to(Vec2::new(136.0, 174.0));
    let frame = edited.image_crop_frame();

    c.bench_function("view/export_restore", |b| {
        b.iter_batched(
            || {
                let mut view = CropView::new(IMAGE);
                view.set_image_crop_frame(frame);
                view
            },
            |mut view| {
                view.layout(VIEW);
                view.perform_initial_setup();
                black_box(view.image_crop_frame());
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_setup,
    bench_gesture_settle,
    bench_aspect_cycle,
    bench_export_restore
);
criterion_main!(benches);

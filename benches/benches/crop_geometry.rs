// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the `cropframe_geometry` hot paths.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Rect, Size, Vec2};

use cropframe_geometry::{
    MAXIMUM_ZOOM_FACTOR, ZoomState, apply_image_crop_frame, clamp_crop_box, fit_initial_crop_box,
    image_crop_frame, recenter,
};

/// A 3:4 source image, roughly camera sized.
const IMAGE: Size = Size::new(1200.0, 1600.0);
/// The padded region of a 328 x 428 view.
const BOUNDS: Rect = Rect::new(14.0, 14.0, 314.0, 414.0);

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop/fit");

    let ratios = [
        ("free", None),
        ("portrait", Some(Size::new(4.0, 5.0))),
        ("square", Some(Size::new(1.0, 1.0))),
        ("landscape", Some(Size::new(1.91, 1.0))),
    ];
    for (name, ratio) in ratios {
        group.bench_with_input(BenchmarkId::from_parameter(name), &ratio, |b, ratio| {
            b.iter(|| {
                black_box(fit_initial_crop_box(
                    IMAGE,
                    BOUNDS,
                    *ratio,
                    MAXIMUM_ZOOM_FACTOR,
                ))
            });
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop/frame");

    // The fitted 4:5 state for `IMAGE` inside `BOUNDS`.
    let crop_box = Rect::new(14.0, 26.0, 314.0, 401.0);
    let content_size = Size::new(300.0, 400.0);
    let content_offset = Vec2::new(-14.0, -14.0);
    let insets = Insets::new(14.0, 26.0, 14.0, 27.0);

    group.bench_function("export", |b| {
        b.iter(|| {
            black_box(image_crop_frame(
                black_box(crop_box),
                content_size,
                IMAGE,
                content_offset,
                insets,
            ))
        });
    });

    group.bench_function("restore", |b| {
        let frame = Rect::new(0.0, 48.0, 1200.0, 1548.0);
        b.iter(|| black_box(apply_image_crop_frame(black_box(frame), BOUNDS, 0.25)));
    });

    group.bench_function("round_trip", |b| {
        b.iter(|| {
            let frame = image_crop_frame(crop_box, content_size, IMAGE, content_offset, insets);
            black_box(apply_image_crop_frame(frame, BOUNDS, 0.25))
        });
    });

    group.finish();
}

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop/sanitize");

    group.bench_function("fractional", |b| {
        let proposed = Rect::new(13.6, 26.4, 313.2, 400.8);
        b.iter(|| black_box(clamp_crop_box(black_box(proposed), BOUNDS, 42.0)));
    });

    group.bench_function("overflowing", |b| {
        let proposed = Rect::new(-40.0, -25.0, 380.0, 460.0);
        b.iter(|| black_box(clamp_crop_box(black_box(proposed), BOUNDS, 42.0)));
    });

    group.finish();
}

fn bench_recenter(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop/recenter");

    // A panned fitted state: the box already spans the region, so only the
    // offset moves.
    group.bench_function("panned", |b| {
        let crop_box = Rect::new(14.0, 26.0, 314.0, 401.0);
        let offset = Vec2::new(36.0, 86.0);
        let zoom = ZoomState::at_minimum(0.25, MAXIMUM_ZOOM_FACTOR);
        b.iter(|| {
            black_box(recenter(
                crop_box,
                BOUNDS,
                black_box(offset),
                Size::new(300.0, 400.0),
                zoom,
            ))
        });
    });

    // An undersized box forces the growth path.
    group.bench_function("undersized", |b| {
        let crop_box = Rect::new(140.0, 160.0, 182.0, 260.0);
        let offset = Vec2::new(100.0, 140.0);
        let zoom = ZoomState::at_minimum(0.25, MAXIMUM_ZOOM_FACTOR);
        b.iter(|| {
            black_box(recenter(
                crop_box,
                BOUNDS,
                black_box(offset),
                Size::new(1200.0, 1600.0),
                zoom,
            ))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_fit,
    bench_frame,
    bench_sanitize,
    bench_recenter
);
criterion_main!(benches);

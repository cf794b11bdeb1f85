// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the stitching pipeline in stitchwerk-compose.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgba, RgbaImage};

use stitchwerk_compose::{Compositor, SourceImage, plan_layout};
use stitchwerk_core::types::{Background, LayoutAxis, Rgb, SizePolicy, StitchSettings};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Four solid images with mismatched heights, so the `Max` policy has to
/// resample three of them.
fn fixtures() -> Vec<SourceImage> {
    [(320, 240), (200, 300), (640, 180), (150, 150)]
        .into_iter()
        .enumerate()
        .map(|(i, (w, h))| {
            let shade = (i as u8).wrapping_mul(60);
            let img = RgbaImage::from_pixel(w, h, Rgba([shade, 128, 255 - shade, 255]));
            SourceImage::from_dynamic(format!("img-{i}"), DynamicImage::ImageRgba8(img))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_plan_layout(c: &mut Criterion) {
    let dims: Vec<(u32, u32)> = (1..=64).map(|i| (i * 7, 1000 / i)).collect();

    c.bench_function("plan_layout (64 images, min)", |b| {
        b.iter(|| {
            black_box(plan_layout(
                black_box(&dims),
                LayoutAxis::Horizontal,
                SizePolicy::Min,
            ))
        });
    });
}

fn bench_composite(c: &mut Criterion) {
    let images = fixtures();
    let compositor = Compositor::default();

    let unscaled = StitchSettings::default();
    c.bench_function("composite (4 images, none, transparent)", |b| {
        b.iter(|| black_box(compositor.composite(black_box(&images), &unscaled)));
    });

    let scaled = StitchSettings {
        axis: LayoutAxis::Horizontal,
        policy: SizePolicy::Max,
        background: Background::Color(Rgb([255, 255, 255])),
    };
    c.bench_function("composite (4 images, max, white)", |b| {
        b.iter(|| black_box(compositor.composite(black_box(&images), &scaled)));
    });
}

criterion_group!(benches, bench_plan_layout, bench_composite);
criterion_main!(benches);

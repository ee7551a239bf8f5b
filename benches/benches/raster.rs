// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use infinite_canvas_history::SnapshotHistory;
use infinite_canvas_raster::{PixmapSurface, RasterSurface, StrokeStyle};
use kurbo::Point;
use peniko::Color;

fn bench_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    // Tile rendering should not depend on the canvas size.
    for &side in &[512_u32, 2_048, 5_000] {
        let mut surface = PixmapSurface::new(side, side, Color::WHITE);
        let style = StrokeStyle::default();
        let center = f64::from(side) / 2.0;
        group.bench_function(format!("short(canvas={side})"), |b| {
            b.iter(|| {
                surface.draw_segment(
                    black_box(Point::new(center, center)),
                    black_box(Point::new(center + 8.0, center + 3.0)),
                    &style,
                );
            });
        });
    }

    for &width in &[1.0_f64, 5.0, 40.0] {
        let mut surface = PixmapSurface::new(1_024, 1_024, Color::WHITE);
        let style = StrokeStyle::new(width, Color::BLACK);
        group.bench_function(format!("long(width={width})"), |b| {
            b.iter(|| {
                surface.draw_segment(
                    black_box(Point::new(100.0, 100.0)),
                    black_box(Point::new(900.0, 700.0)),
                    &style,
                );
            });
        });
    }

    group.finish();
}

fn bench_snapshots(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    group.sample_size(20);

    for &side in &[512_u32, 2_048] {
        let surface = PixmapSurface::new(side, side, Color::WHITE);
        group.bench_function(format!("read(side={side})"), |b| {
            b.iter(|| black_box(surface.read_pixels()));
        });

        let snapshot = surface.read_pixels();
        let mut target = PixmapSurface::new(side, side, Color::BLACK);
        group.bench_function(format!("write(side={side})"), |b| {
            b.iter(|| black_box(target.write_pixels(&snapshot)));
        });

        group.bench_function(format!("undo(side={side})"), |b| {
            b.iter_batched(
                || {
                    let mut history = SnapshotHistory::with_baseline(8, surface.read_pixels());
                    let _ = history.push(surface.read_pixels());
                    (history, PixmapSurface::new(side, side, Color::BLACK))
                },
                |(mut history, mut target)| {
                    if let Some(snapshot) = history.undo() {
                        target.write_pixels(snapshot);
                    }
                    black_box(target);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segments, bench_snapshots);
criterion_main!(benches);

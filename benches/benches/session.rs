// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use infinite_canvas::{CanvasConfig, CanvasSession};
use infinite_canvas_gesture::RawInput;
use infinite_canvas_view::{Viewport, ZoomDirection};
use kurbo::{Point, Rect};

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport");
    let mut view = Viewport::new(Rect::new(0.0, 0.0, 1_280.0, 800.0));

    group.bench_function("screen_to_virtual", |b| {
        b.iter(|| black_box(view.screen_to_virtual(black_box(Point::new(640.0, 400.0)))));
    });
    group.bench_function("zoom_in_out", |b| {
        b.iter(|| {
            view.zoom_at(black_box(Point::new(300.0, 200.0)), ZoomDirection::In);
            view.zoom_at(black_box(Point::new(300.0, 200.0)), ZoomDirection::Out);
        });
    });

    group.finish();
}

fn bench_freehand(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    group.sample_size(20);

    let config = CanvasConfig {
        canvas_width: 1_024,
        canvas_height: 1_024,
        max_history: 4,
        ..CanvasConfig::default()
    };
    let Ok(mut session) = CanvasSession::new(config, Rect::new(0.0, 0.0, 800.0, 600.0)) else {
        return;
    };

    // A 64-point zigzag stroke, including the undo snapshot on press.
    group.bench_function("stroke(points=64)", |b| {
        b.iter(|| {
            session.handle_raw(RawInput::MouseDown {
                pos: Point::new(100.0, 100.0),
            });
            for i in 0..64 {
                let x = 100.0 + f64::from(i) * 8.0;
                let y = if i % 2 == 0 { 100.0 } else { 140.0 };
                session.handle_raw(RawInput::MouseMove {
                    pos: Point::new(x, y),
                });
            }
            session.handle_raw(RawInput::MouseUp);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_viewport, bench_freehand);
criterion_main!(benches);

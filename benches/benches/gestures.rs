// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the per-frame gesture paths of `vista_zoom`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use vista_gesture::{PanSample, RecognizerState, TouchAdapter, UnitPoint};
use vista_zoom::{ReboundCurve, ViewerConfig, ZoomView};

fn zoomed_view(curve: ReboundCurve) -> ZoomView {
    let mut view = ZoomView::with_sizes(
        ViewerConfig::default().with_rebound_curve(curve),
        Size::new(400.0, 800.0),
        Size::new(3000.0, 4000.0),
    );
    view.double_tap(Point::new(100.0, 100.0));
    let mut now = 0;
    while view.tick(now) {
        now += 16;
    }
    view
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/pan");
    for steps in [16_usize, 256] {
        group.bench_function(BenchmarkId::new("update_free", steps), |b| {
            b.iter_batched(
                || zoomed_view(ReboundCurve::Linear),
                |mut view| {
                    view.begin_pan(Point::new(200.0, 400.0));
                    for i in 0..steps {
                        let t = i as f64 * 7.0;
                        view.update_pan(black_box(Vec2::new(t, -t * 0.5)));
                    }
                    black_box(view.transform())
                },
                BatchSize::SmallInput,
            );
        });
    }
    for curve in [ReboundCurve::Linear, ReboundCurve::PowerLaw] {
        group.bench_function(BenchmarkId::new("release_rebound", format!("{curve:?}")), |b| {
            b.iter_batched(
                || zoomed_view(curve),
                |mut view| {
                    view.begin_pan(Point::ZERO);
                    view.update_pan(Vec2::new(400.0, 400.0));
                    view.end_pan(Vec2::new(400.0, 400.0), black_box(Vec2::new(4000.0, 4000.0)));
                    let mut now = 0;
                    while view.tick(now) {
                        now += 16;
                    }
                    black_box(view.offset())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/pinch");
    group.bench_function("update", |b| {
        b.iter_batched(
            || {
                ZoomView::with_sizes(
                    ViewerConfig::default(),
                    Size::new(400.0, 800.0),
                    Size::new(1200.0, 900.0),
                )
            },
            |mut view| {
                view.begin_pinch(UnitPoint::new(0.3, 0.6));
                for i in 0..128 {
                    view.update_pinch(black_box(1.0 + f64::from(i) * 0.02));
                }
                view.end_pinch();
                black_box(view.size())
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_adapter(c: &mut Criterion) {
    c.bench_function("gesture/touch_pan_stream", |b| {
        b.iter(|| {
            let mut adapter = TouchAdapter::default();
            let mut count = 0;
            for i in 0..64_u64 {
                let state = if i == 0 {
                    RecognizerState::Began
                } else {
                    RecognizerState::Changed
                };
                count += adapter
                    .pan(PanSample {
                        state,
                        translation: Vec2::new(0.0, i as f64 * 3.0),
                        velocity: Vec2::new(0.0, 900.0),
                        location: Point::new(200.0, 400.0),
                        time_ms: i * 16,
                    })
                    .len();
            }
            black_box(count)
        });
    });
}

criterion_group!(benches, bench_pan, bench_pinch, bench_adapter);
criterion_main!(benches);

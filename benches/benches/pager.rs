// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `vista_pager` window maintenance.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use vista_gesture::GestureEvent;
use vista_pager::{Browser, ContentProvider, ItemResponse, PagerConfig};

struct Album {
    len: usize,
}

impl ContentProvider for Album {
    fn len(&self) -> usize {
        self.len
    }

    fn request(&mut self, index: usize) -> ItemResponse {
        let side = 600.0 + (index % 7) as f64 * 100.0;
        ItemResponse::Ready(Size::new(side, 900.0))
    }
}

fn bench_window_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/window_sync");
    for radius in [1_usize, 4] {
        group.bench_function(BenchmarkId::new("scroll_through", radius), |b| {
            let config = PagerConfig::default()
                .with_realize_radius(radius)
                .with_prefetch_radius(radius * 2);
            let mut browser = Browser::new(Album { len: 10_000 }, config, Size::new(400.0, 800.0));
            let mut index = 0;
            b.iter(|| {
                index = (index + 1) % 10_000;
                browser.scroll_to(black_box(index), false);
                black_box(browser.take_events().len())
            });
        });
    }
    group.bench_function("drag_across_pages", |b| {
        let mut browser = Browser::new(
            Album { len: 1_000 },
            PagerConfig::default(),
            Size::new(400.0, 800.0),
        );
        b.iter(|| {
            browser.scroll_to(500, false);
            browser.handle(GestureEvent::PanBegan {
                location: Point::new(200.0, 400.0),
            });
            for i in 1..=32 {
                browser.handle(GestureEvent::PanChanged {
                    translation: Vec2::new(f64::from(i) * -40.0, 0.0),
                });
            }
            browser.handle(GestureEvent::PanCancelled);
            black_box(browser.current_index())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_window_sync);
criterion_main!(benches);

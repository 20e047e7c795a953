// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use std::time::Duration;
use understory_marquee::{
    MarqueeController, MarqueeOverlay, MarqueeStyle, OverlayContainer, rect_from_points,
};

/// Overlay that only keeps the latest bounds.
#[derive(Debug, Default)]
struct NullOverlay {
    bounds: Rect,
}

impl MarqueeOverlay for NullOverlay {
    fn apply_style(&mut self, _style: &MarqueeStyle) {}

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn detach(self) {
        black_box(self.bounds);
    }
}

struct NullContainer;

impl OverlayContainer for NullContainer {
    type Overlay = NullOverlay;

    fn insert_overlay(&mut self, _stack_order: usize) -> NullOverlay {
        NullOverlay::default()
    }
}

/// A pointer path spiralling around the anchor so every quadrant is visited.
fn pointer_path(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.05;
            Point::new(200.0 + t.cos() * t * 4.0, 150.0 + t.sin() * t * 4.0)
        })
        .collect()
}

fn bench_rect_from_points(c: &mut Criterion) {
    let path = pointer_path(1_024);
    let anchor = Point::new(200.0, 150.0);
    let mut group = c.benchmark_group("marquee/rect_from_points");
    group.throughput(Throughput::Elements(path.len() as u64));
    group.bench_function("spiral", |b| {
        b.iter(|| {
            for &p in &path {
                black_box(rect_from_points(black_box(anchor), p));
            }
        });
    });
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("marquee/drag");
    group.measurement_time(Duration::from_secs(3));
    for len in [16usize, 256, 4_096] {
        let path = pointer_path(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("start_update_end", len), &path, |b, path| {
            let mut marquee = MarqueeController::new(MarqueeStyle::default());
            let mut container = NullContainer;
            b.iter(|| {
                marquee.start(Point::new(200.0, 150.0), Some(&mut container));
                for &p in path {
                    marquee.update(p);
                }
                black_box(marquee.end(path[path.len() - 1]));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rect_from_points, bench_drag);
criterion_main!(benches);

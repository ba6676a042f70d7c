// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use diorama_diagram::Diagram;
use diorama_gallery::cycle_flow;
use diorama_hit::{HitRegion, hit_test};
use diorama_layout::Layout;
use kurbo::{Point, Rect, Size};

fn bench_relayout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/positions");

    // Item counts in shipped diagrams top out at 10; sweep a bit past that
    // to confirm relayout-per-frame stays cheap.
    for n in [4usize, 6, 10, 16] {
        for (name, layout) in [
            ("ring", Layout::ring()),
            ("grid", Layout::grid(3)),
            ("row", Layout::row()),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, n),
                &(layout, n),
                |b, &(layout, n)| {
                    b.iter(|| black_box(layout.positions(n, Size::new(640.0, 480.0))));
                },
            );
        }
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/hit_test");

    let layout = Layout::grid(4);
    let size = Size::new(800.0, 600.0);
    for n in [4usize, 8, 16] {
        let regions: Vec<HitRegion> = (0..n)
            .map(|i| HitRegion::rect(layout.region(i, n, size)))
            .collect();
        let last = match regions[n - 1].shape {
            diorama_hit::HitShape::Rect(r) => r,
            diorama_hit::HitShape::Circle { .. } => Rect::ZERO,
        };

        group.bench_with_input(BenchmarkId::new("last", n), &regions, |b, regions| {
            b.iter(|| black_box(hit_test(last.center(), regions)));
        });
        group.bench_with_input(BenchmarkId::new("miss", n), &regions, |b, regions| {
            b.iter(|| black_box(hit_test(Point::new(-10.0, -10.0), regions)));
        });
    }
    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut diagram = Diagram::new(cycle_flow(), Size::new(640.0, 480.0));
    diagram.toggle_animation();

    c.bench_function("diagram/frame", |b| {
        b.iter(|| {
            diagram.tick();
            black_box(diagram.frame());
        });
    });
}

criterion_group!(benches, bench_relayout, bench_hit_test, bench_frame);
criterion_main!(benches);

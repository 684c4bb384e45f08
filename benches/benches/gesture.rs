// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_gesture`.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use std::sync::Arc;
use std::vec::Vec;

use understory_gesture::config::{GestureConfig, Thresholds};
use understory_gesture::direction::Direction::{self, Down, Left, Right, Up};
use understory_gesture::pattern::GestureMap;
use understory_gesture::resolve::resolve_directions;
use understory_gesture::sequence::SequenceBuilder;
use understory_gesture::session::{GestureSession, PointerButton};

/// A zig-zag path: `legs` straight legs of `per_leg` samples each, with a
/// short wobble at every turn so the jitter filter has work to do.
fn zigzag(legs: usize, per_leg: usize) -> Vec<Point> {
    let headings = [Up, Right, Down, Right];
    let mut points = Vec::with_capacity(legs * (per_leg + 1));
    let mut p = Point::new(500.0, 500.0);
    for leg in 0..legs {
        let step = headings[leg % headings.len()].unit_vec() * 4.0;
        for _ in 0..per_leg {
            p += step;
            points.push(p);
        }
        // Wobble sideways below the jitter threshold.
        p += headings[(leg + 1) % headings.len()].unit_vec() * 12.0;
        points.push(p);
    }
    points
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/classify");
    let origin = Point::new(0.0, 0.0);
    let targets: Vec<Point> = (0..360)
        .map(|deg| {
            let rad = f64::from(deg).to_radians();
            Point::new(rad.cos() * 50.0, rad.sin() * 50.0)
        })
        .collect();
    group.throughput(Throughput::Elements(targets.len() as u64));
    group.bench_function("full_circle", |b| {
        b.iter(|| {
            for &t in &targets {
                black_box(Direction::classify(black_box(origin), t));
            }
        });
    });
    group.finish();
}

fn bench_sequence_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/sequence_feed");

    for (legs, per_leg) in [(2usize, 16usize), (3, 64), (8, 256)] {
        let path = zigzag(legs, per_leg);
        group.throughput(Throughput::Elements(path.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("zigzag", path.len()),
            &path,
            |b, path| {
                b.iter_batched(
                    || SequenceBuilder::new(Thresholds::default()),
                    |mut builder| {
                        builder.start(Point::new(500.0, 500.0));
                        for &p in path {
                            black_box(builder.feed(p));
                        }
                        black_box(builder.finish());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/resolve");
    let map = GestureMap::with_defaults();

    let cases: [(&str, &[Direction]); 4] = [
        ("exact", &[Right, Down]),
        ("simplified", &[Up, Down, Right]),
        ("miss_equal_ends", &[Right, Up, Right]),
        ("miss_long", &[Up, Right, Down, Left, Up]),
    ];
    for (name, dirs) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), dirs, |b, dirs| {
            b.iter(|| black_box(resolve_directions(black_box(dirs), &map)));
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/session");
    let config = Arc::new(GestureConfig::default());
    let path = zigzag(2, 32);
    group.throughput(Throughput::Elements(path.len() as u64));

    // Includes the per-sample preview lookup once sensitivity is reached.
    group.bench_function("press_drag_release", |b| {
        b.iter_batched(
            GestureSession::new,
            |mut session| {
                session.start(PointerButton::Secondary, Point::new(500.0, 500.0), config.clone());
                for &p in &path {
                    black_box(session.feed(p));
                }
                black_box(session.end(PointerButton::Secondary));
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_sequence_feed,
    bench_resolve,
    bench_session
);
criterion_main!(benches);

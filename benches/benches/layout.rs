// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use timestrip::{Item, ItemId, Timeline, TimelineConfig};
use timestrip_scale::{DateWindow, axis_marks};

fn gen_items(n: u64, origin: NaiveDate) -> Vec<Item> {
    (0..n)
        .map(|i| {
            let start = origin + Days::new(i * 7 % 365);
            let end = start + Days::new(i % 21);
            Item::new(ItemId(i), format!("Item {i}"), start, end).unwrap()
        })
        .collect()
}

fn bench_axis(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/axis_marks");
    let min = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for days in [30_u64, 365, 3 * 365] {
        let window = DateWindow::new(min, min + Days::new(days));
        group.bench_with_input(BenchmarkId::from_parameter(days), &window, |b, window| {
            b.iter(|| black_box(axis_marks(window, 30.0)))
        });
    }
    group.finish();
}

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/timeline");
    let origin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for n in [100_u64, 1_000] {
        let timeline = Timeline::new(gen_items(n, origin), TimelineConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("layout", n), &timeline, |b, timeline| {
            b.iter(|| black_box(timeline.layout()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_axis, bench_timeline);
criterion_main!(benches);

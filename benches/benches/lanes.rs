// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ops::RangeInclusive;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use timestrip_lanes::{assign_lane_indices, assign_lanes};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

/// `n` ranges scattered over roughly a year, lasting up to a month each.
fn gen_ranges(n: usize, seed: u64) -> Vec<RangeInclusive<u32>> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| {
            let start = rng.next_u32() % 365;
            let len = rng.next_u32() % 30;
            start..=start + len
        })
        .collect()
}

fn bench_lanes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanes/assign");
    for n in [100_usize, 1_000, 10_000] {
        let ranges = gen_ranges(n, 0x5eed);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("lanes", n), &ranges, |b, ranges| {
            b.iter(|| black_box(assign_lanes(ranges.iter().cloned())))
        });

        group.bench_with_input(BenchmarkId::new("indices", n), &ranges, |b, ranges| {
            b.iter(|| black_box(assign_lane_indices(ranges)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lanes);
criterion_main!(benches);

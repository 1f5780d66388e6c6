//! Benchmark for the lazy sequence adapters.
//!
//! Measures full traversal and early exit against the equivalent standard
//! iterator chains.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use map_utils::sequence::SequenceExt;
use std::hint::black_box;

fn build_pairs(size: u32) -> Vec<(u32, u32)> {
    (0..size).map(|index| (index, index + 1)).collect()
}

// =============================================================================
// Full traversal Benchmark
// =============================================================================

fn benchmark_full_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("full_traversal");

    for size in [1_000, 100_000] {
        let pairs = build_pairs(size);

        group.bench_with_input(BenchmarkId::new("remap_func", size), &pairs, |bencher, pairs| {
            bencher.iter(|| {
                let remapped: Result<Vec<(u32, u32)>, ()> = pairs
                    .iter()
                    .map(|(key, value)| (*key, *value))
                    .remap_func(|key, value| Ok((value, key)))
                    .collect();
                black_box(remapped)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_map", size), &pairs, |bencher, pairs| {
            bencher.iter(|| {
                let remapped: Vec<(u32, u32)> =
                    pairs.iter().map(|(key, value)| (*value, *key)).collect();
                black_box(remapped)
            });
        });

        group.bench_with_input(BenchmarkId::new("weight_func", size), &pairs, |bencher, pairs| {
            bencher.iter(|| {
                let total: u64 = pairs
                    .iter()
                    .map(|(key, value)| (*key, *value))
                    .weight_func(|key, value| u64::from(key) + u64::from(value))
                    .sum();
                black_box(total)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("flatten_pairs", size),
            &pairs,
            |bencher, pairs| {
                bencher.iter(|| black_box(pairs.iter().copied().flatten_pairs().count()));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Early exit Benchmark
// =============================================================================

fn benchmark_early_exit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("early_exit");
    let pairs = build_pairs(100_000);

    for taken in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("slice_func_take", taken), &taken, |bencher, &taken| {
            bencher.iter(|| {
                let found: Result<Vec<u32>, ()> = pairs
                    .iter()
                    .copied()
                    .slice_func(|key, value| Ok((key % 2 == 0).then_some(value)))
                    .take(black_box(taken))
                    .collect();
                black_box(found)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_full_traversal, benchmark_early_exit);

criterion_main!(benches);

//! Benchmark for LazyStream against eager Vec and std iterators.
//!
//! Compares the cost of laziness and memoization for common traversals.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazy_stream::stream::LazyStream;
use std::hint::black_box;

// =============================================================================
// to_list Benchmark
// =============================================================================

fn benchmark_to_list(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("to_list");

    for size in [100, 1000, 10000] {
        let elements: Vec<i64> = (0..size).collect();

        // Fresh stream: every node and element is built during the traversal
        group.bench_with_input(
            BenchmarkId::new("LazyStream_fresh", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| {
                    let stream = LazyStream::of(elements.clone());
                    black_box(stream.to_list_eager())
                });
            },
        );

        // Memoized stream: everything is already forced
        let forced = LazyStream::of(elements.clone());
        let _ = forced.to_list_eager();
        group.bench_with_input(
            BenchmarkId::new("LazyStream_memoized", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(forced.to_list_eager()));
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec_clone", size), &elements, |bencher, elements| {
            bencher.iter(|| black_box(elements.clone()));
        });
    }

    group.finish();
}

// =============================================================================
// take Benchmark
// =============================================================================

fn benchmark_take(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("take");

    for count in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("LazyStream_from", count),
            &count,
            |bencher, &count| {
                bencher.iter(|| black_box(LazyStream::from(0_i64).take(count).to_list_eager()));
            },
        );

        group.bench_with_input(BenchmarkId::new("Iterator", count), &count, |bencher, &count| {
            bencher.iter(|| black_box((0_i64..).take(count).collect::<Vec<_>>()));
        });
    }

    group.finish();
}

// =============================================================================
// exists / find Benchmark
// =============================================================================

fn benchmark_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("short_circuit");

    // exists recurses through fold_right, so keep the depth moderate
    for size in [100, 1000] {
        let stream = LazyStream::of((0..size).collect::<Vec<i64>>());
        let _ = stream.to_list_eager();
        let target = size - 1;

        group.bench_with_input(BenchmarkId::new("exists", size), &target, |bencher, &target| {
            bencher.iter(|| black_box(stream.exists(|x| *x == target)));
        });

        group.bench_with_input(BenchmarkId::new("find", size), &target, |bencher, &target| {
            bencher.iter(|| black_box(stream.find(|x| *x == target)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_to_list,
    benchmark_take,
    benchmark_short_circuit
);
criterion_main!(benches);

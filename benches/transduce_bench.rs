//! Benchmark for the transducer pipeline against hand-written iterator
//! chains, including the short-circuit path.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use currycomb::transduce::{build_vec, filter, iterated, map, take, transduce};
use std::hint::black_box;

fn benchmark_map_filter_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("transduce_map_filter");

    for size in [100, 1_000, 10_000] {
        let source: Vec<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("transducer", size),
            &source,
            |bencher, source| {
                bencher.iter(|| {
                    let pipeline = map(|n: i32| n * 3, filter(|n: &i32| n % 2 == 0, build_vec()));
                    black_box(transduce(pipeline, black_box(source.clone())))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("iterator_baseline", size),
            &source,
            |bencher, source| {
                bencher.iter(|| {
                    let collected: Vec<i32> = black_box(source.clone())
                        .into_iter()
                        .map(|n| n * 3)
                        .filter(|n| n % 2 == 0)
                        .collect();
                    black_box(collected)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("transduce_short_circuit");

    // The take(n) cut means source length should not matter.
    for size in [1_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("take_10_of", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let taken = transduce(take(10, build_vec()), iterated(0..size));
                    black_box(taken)
                });
            },
        );
    }

    group.bench_function("take_10_of_endless", |bencher| {
        bencher.iter(|| black_box(transduce(take(10, build_vec()), iterated(0..))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_map_filter_pipeline, benchmark_short_circuit);
criterion_main!(benches);

//! Measures how long identifications take as traces & the number of registered disciplines grow,
//! along with the cost of the instrumentation options.

use std::hint::black_box;
use structure_identifier::prelude::*;
use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId,
};


/// Builds a trace of `len` pushes followed by `len` pops, as a max priority queue would give them back
fn max_priority_trace(len: i32) -> Vec<Operation<i32>> {
    let elements: Vec<i32> = (0..len).map(|i| (i * 7919) % len).collect();
    let mut sorted = elements.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    elements.into_iter().map(Operation::Push)
        .chain(sorted.into_iter().map(Operation::Pop))
        .collect()
}

/// Measures identifications for growing traces, with the default & the full set of disciplines
fn bench_trace_lengths(criterion: &mut Criterion) {

    let mut group = criterion.benchmark_group("Trace Lengths");

    for len in [16, 1024, 65536] {
        let trace = max_priority_trace(len);

        let mut identifier = default_identifier();
        group.bench_with_input(BenchmarkId::new("default identifier", len), &trace, |bencher, trace| bencher.iter(|| black_box({
            identifier.identify(trace)
        })));

        let mut identifier = full_identifier();
        group.bench_with_input(BenchmarkId::new("full identifier", len), &trace, |bencher, trace| bencher.iter(|| black_box({
            identifier.identify(trace)
        })));
    }

    group.finish();
}

/// Measures the overhead of each [Instruments] option
fn bench_instruments(criterion: &mut Criterion) {

    let mut group = criterion.benchmark_group("Instruments");
    let trace = max_priority_trace(1024);

    let mut identifier = StructureIdentifier::<i32, {Instruments::Uninstrumented.into()}>::with_all_structures();
    group.bench_function("Uninstrumented", |bencher| bencher.iter(|| black_box({
        identifier.identify(&trace)
    })));

    let mut identifier = StructureIdentifier::<i32, {Instruments::MetricsWithoutDiagnostics.into()}>::with_all_structures();
    group.bench_function("MetricsWithoutDiagnostics", |bencher| bencher.iter(|| black_box({
        identifier.identify(&trace)
    })));

    group.finish();
}

criterion_group!(benches, bench_trace_lengths, bench_instruments);
criterion_main!(benches);

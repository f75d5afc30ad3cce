use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bazi_rs::{compute_chart, compute_element_tally};

fn rs_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("bazi_rs");

    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box("1990-01-15T08:30")))
    });

    group.bench_function("compute_element_tally", |b| {
        let chart = compute_chart("1990-01-15T08:30").unwrap();
        b.iter(|| compute_element_tally(black_box(&chart)))
    });

    group.finish();
}

criterion_group!(benches, rs_benchmarks);
criterion_main!(benches);

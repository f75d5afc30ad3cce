use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bazi_chart::{compute_pillars, derive_chart, element_tally};
use bazi_time::CivilDateTime;

fn chart_benchmarks(c: &mut Criterion) {
    let t = CivilDateTime::new(1990, 1, 15, 8, 30).unwrap();
    let mut group = c.benchmark_group("chart");

    group.bench_function("compute_pillars", |b| {
        b.iter(|| compute_pillars(black_box(&t)))
    });

    group.bench_function("derive_chart", |b| {
        let chart = compute_pillars(&t);
        b.iter(|| derive_chart(black_box(chart)))
    });

    group.bench_function("element_tally", |b| {
        let info = derive_chart(compute_pillars(&t));
        b.iter(|| element_tally(black_box(info.pillars()), 0.5))
    });

    group.finish();
}

criterion_group!(benches, chart_benchmarks);
criterion_main!(benches);

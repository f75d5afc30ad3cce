use criterion::{Criterion, black_box, criterion_group, criterion_main};
use bazi_base::{
    ALL_BRANCHES, ALL_STEMS, FourPillars, Pillar, Sexagenary, life_stage, nacchin,
    special_stars, ten_god, void_pair,
};

fn lookup_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookups");
    group.bench_function("ten_god_all_pairs", |b| {
        b.iter(|| {
            for dm in ALL_STEMS {
                for s in ALL_STEMS {
                    black_box(ten_god(black_box(dm), black_box(s)));
                }
            }
        })
    });
    group.bench_function("life_stage_all_pairs", |b| {
        b.iter(|| {
            for dm in ALL_STEMS {
                for br in ALL_BRANCHES {
                    black_box(life_stage(black_box(dm), black_box(br)));
                }
            }
        })
    });
    group.bench_function("nacchin_and_void_cycle", |b| {
        b.iter(|| {
            for i in 0..60 {
                let p = Pillar::from(Sexagenary::from_cycle(black_box(i)));
                black_box((nacchin(p), void_pair(p)));
            }
        })
    });
    group.finish();
}

fn star_bench(c: &mut Criterion) {
    let pillars = FourPillars::new(
        Pillar::from(Sexagenary::from_cycle(1)),
        Pillar::from(Sexagenary::from_cycle(5)),
        Pillar::from(Sexagenary::from_cycle(30)),
        Pillar::from(Sexagenary::from_cycle(3)),
    );
    c.bench_function("special_stars", |b| {
        b.iter(|| special_stars(black_box(&pillars)))
    });
}

criterion_group!(benches, lookup_bench, star_bench);
criterion_main!(benches);

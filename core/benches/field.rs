use criterion::{Criterion, criterion_group, criterion_main};
use fieldsweep_core::*;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in [
        ("9x9x10", GameConfig::new(9, 9, 10).unwrap()),
        ("16x16x40", GameConfig::DEFAULT),
        ("30x16x99", GameConfig::new(30, 16, 99).unwrap()),
        ("30x16x300", GameConfig::new(30, 16, 300).unwrap()),
    ] {
        let mut generator = RandomFieldGenerator::new(0);
        group.bench_function(name, |b| b.iter(|| generator.generate(black_box(config))));
    }
    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let empty = Grid::from_mine_coords((64, 64), &[]).unwrap();
    c.bench_function("open_region/64x64_empty", |b| {
        b.iter_batched(
            || empty.clone(),
            |mut grid| open_region(&mut grid, black_box((32, 32))),
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("session/first_reveal_16x16x40", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut session = Session::with_seed(GameConfig::DEFAULT, seed);
            session.reveal(black_box((8, 8))).unwrap()
        })
    });
}

criterion_group!(benches, bench_generate, bench_cascade);
criterion_main!(benches);

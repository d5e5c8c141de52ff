use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use bandito_core::*;

fn classic_config(dimension: &str) -> GameConfig {
    GameConfig::new(dimension.parse().unwrap(), SymbolCatalog::classic())
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for dimension in ["3x3", "9x9", "30x30"] {
        let config = classic_config(dimension);
        group.bench_function(dimension, |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                WeightedBoardGenerator::new(black_box(seed))
                    .generate(&config)
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let config = classic_config("9x9");
    let board = WeightedBoardGenerator::new(7).generate(&config).unwrap();

    let mut group = c.benchmark_group("evaluate");
    for (name, rule) in [
        ("row_or_column", WinRule::RowOrColumn),
        ("diagonals", WinRule::Diagonals),
        ("any_uniform_row", WinRule::AnyUniformRow),
    ] {
        group.bench_function(name, |b| b.iter(|| black_box(&board).evaluate(rule)));
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_evaluate);
criterion_main!(benches);

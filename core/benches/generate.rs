use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kaboom_core::*;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let tiers = [
        ("9x9-10", GameConfig::new(9, 9, 10)),
        ("16x30-99", GameConfig::new(16, 30, 99)),
        ("300x300-9000", GameConfig::new(300, 300, 9_000)),
    ];

    for (name, config) in tiers {
        let config = config.expect("benchmark config is valid");
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(ShuffleLayoutGenerator::new(seed).generate(config))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);

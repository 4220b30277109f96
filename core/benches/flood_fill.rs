use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use kaboom_core::*;
use std::hint::black_box;

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    for side in [30, 100, 300] {
        let layout = MineLayout::from_mine_coords((side, side), &[(0, 0)])
            .expect("benchmark layout is valid");
        let far_corner = (i32::from(side) - 1, i32::from(side) - 1);

        group.bench_with_input(BenchmarkId::from_parameter(side), &layout, |b, layout| {
            b.iter_batched(
                || Game::from_layout(layout.clone()),
                |mut game| black_box(game.reveal(far_corner)),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flood_fill);
criterion_main!(benches);

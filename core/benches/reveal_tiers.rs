use std::hint::black_box;

use blackhole_core::*;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

fn reveal_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_reveal");

    // one hazard in a corner, so a single inspect floods the whole board
    for size in [MIN_DIMENSION, 16, MAX_DIMENSION] {
        let layout = Grid::from_hazard_coords((size, size), &[(size - 1, size - 1)]).unwrap();
        group.bench_with_input(BenchmarkId::new("open_board", size), &layout, |b, layout| {
            b.iter_batched(
                || layout.clone(),
                |(mut grid, hazards)| {
                    let outcome = inspect(&mut grid, &hazards, (0, 0)).unwrap();
                    black_box((grid, outcome))
                },
                BatchSize::SmallInput,
            );
        });
    }

    let (grid, hazards) = generate_field(MAX_DIMENSION, MAX_DIMENSION, 320, 7).unwrap();
    let hazard = hazards.iter().next().unwrap();
    group.bench_function("hit_hazard_max", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut grid| black_box(inspect(&mut grid, &hazards, hazard).unwrap()),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, reveal_tiers);
criterion_main!(benches);

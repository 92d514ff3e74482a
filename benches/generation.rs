//! Performance measurement for maze carving at varying grid sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mazetint::algorithm::MazeGenerator;
use mazetint::grid::Mask;
use std::hint::black_box;

/// Measures carving cost as the grid grows
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in &[16usize, 64, 256] {
        let mask = Mask::all_passable(*size, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut generator = MazeGenerator::new(12345);
                let maze = generator.generate(black_box(&mask), size / 2, size / 2);
                black_box(maze)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);

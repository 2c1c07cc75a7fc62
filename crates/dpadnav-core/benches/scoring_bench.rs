//! Benchmarks for the directional scoring hot path.
//!
//! `best_in_direction` runs once per key press over every candidate in scope,
//! so the per-candidate cost is the number that matters.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use dpadnav_core::{Direction, Rect, best_in_direction};

fn grid_candidates(cols: u64, rows: u64) -> Vec<(u64, Rect)> {
    let mut out = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let id = row * cols + col;
            let rect =
                Rect::from_origin_size(col as f64 * 120.0, row as f64 * 80.0, 100.0, 60.0);
            out.push((id, rect));
        }
    }
    out
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");

    for &(cols, rows) in &[(10u64, 10u64), (40, 25)] {
        let candidates = grid_candidates(cols, rows);
        let reference = Rect::from_origin_size(
            (cols / 2) as f64 * 120.0,
            (rows / 2) as f64 * 80.0,
            100.0,
            60.0,
        );

        group.bench_function(format!("best_in_direction_{}x{}", cols, rows), |b| {
            b.iter(|| {
                for dir in Direction::ALL {
                    black_box(best_in_direction(
                        black_box(reference),
                        candidates.iter().copied(),
                        dir,
                    ));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);

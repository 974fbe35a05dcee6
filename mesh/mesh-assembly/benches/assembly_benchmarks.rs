//! Benchmarks for mesh-assembly operations.
//!
//! Run with: cargo bench -p mesh-assembly

#![allow(missing_docs, clippy::cast_precision_loss)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mesh_assembly::{BatchParams, Shot, assemble_batch, check_overlaps};

// =============================================================================
// Helpers
// =============================================================================

/// A cubic grid of `n^3` unit shots with a small gap between neighbours.
fn shot_grid(n: usize) -> Vec<Shot> {
    let mut shots = Vec::with_capacity(n * n * n);
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                shots.push(Shot::from_coords(
                    2.1 * i as f64,
                    2.1 * j as f64,
                    2.1 * k as f64,
                    1.0,
                ));
            }
        }
    }
    shots
}

// =============================================================================
// Batch Benchmarks
// =============================================================================

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("AssembleBatch");
    group.sample_size(20);

    for n in [2usize, 3, 4] {
        let shots = shot_grid(n);
        group.throughput(Throughput::Elements(shots.len() as u64));

        group.bench_with_input(BenchmarkId::new("parallel", shots.len()), &shots, |b, s| {
            let params = BatchParams::new(0.2);
            b.iter(|| assemble_batch(black_box(s), &params));
        });

        group.bench_with_input(BenchmarkId::new("serial", shots.len()), &shots, |b, s| {
            let params = BatchParams::new(0.2).with_parallel(false);
            b.iter(|| assemble_batch(black_box(s), &params));
        });
    }

    group.finish();
}

fn bench_overlaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("CheckOverlaps");

    for n in [5usize, 10] {
        let shots = shot_grid(n);
        group.bench_with_input(BenchmarkId::from_parameter(shots.len()), &shots, |b, s| {
            b.iter(|| check_overlaps(black_box(s)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_assemble, bench_overlaps);
criterion_main!(benches);

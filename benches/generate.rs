//! Benchmarks for galaxy generation and buffer packing.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spiral_galaxy::prelude::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for count in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("default", count), &count, |b, &count| {
            let params = GalaxyParams::default().with_count(count);
            let mut rng = SeededRandom::new(42);
            b.iter(|| black_box(generate(&params, &mut rng)))
        });
    }

    group.bench_function("plain_50k", |b| {
        let params = GalaxyParams::plain().with_count(50_000);
        let mut rng = SeededRandom::new(42);
        b.iter(|| black_box(generate(&params, &mut rng)))
    });

    group.finish();
}

fn bench_buffers(c: &mut Criterion) {
    let params = GalaxyParams::default();
    let cloud = match generate(&params, &mut SeededRandom::new(7)) {
        Ok(cloud) => cloud,
        Err(e) => panic!("default parameters must generate: {}", e),
    };

    let mut group = c.benchmark_group("buffers");
    group.bench_function("flat_arrays", |b| {
        b.iter(|| black_box((cloud.positions(), cloud.colors())))
    });
    group.bench_function("interleaved", |b| b.iter(|| black_box(cloud.vertices())));
    group.finish();
}

criterion_group!(benches, bench_generate, bench_buffers);
criterion_main!(benches);

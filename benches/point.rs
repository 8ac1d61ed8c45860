//! Projective point benchmarks.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use nistec::p256::ProjectivePoint;

const SCALAR: [u8; 32] = [0xa5; 32];

pub fn p256(c: &mut Criterion) {
    let mut group = c.benchmark_group("P-256");

    let g = ProjectivePoint::GENERATOR;
    let two_g = g.double();

    group.bench_function("add", |b| b.iter(|| black_box(g).add(&black_box(two_g))));

    group.bench_function("double", |b| b.iter(|| black_box(g).double()));

    group.bench_function("mul", |b| b.iter(|| black_box(g).mul(&black_box(SCALAR))));

    // First iteration pays for building the generator tables; steady
    // state is what gets measured.
    group.bench_function("mul_by_generator", |b| {
        b.iter(|| ProjectivePoint::mul_by_generator(&black_box(SCALAR)).unwrap())
    });

    group.bench_function("from_bytes", |b| {
        let encoded = two_g.to_bytes();
        b.iter(|| ProjectivePoint::from_bytes(black_box(&encoded)).unwrap())
    });

    group.bench_function("from_bytes_compressed", |b| {
        let encoded = two_g.to_bytes_compressed();
        b.iter(|| ProjectivePoint::from_bytes(black_box(&encoded)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, p256);
criterion_main!(benches);

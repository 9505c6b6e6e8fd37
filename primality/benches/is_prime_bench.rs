//! Criterion benchmark for trial-division primality testing

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use primality::{IsPrime, is_prime};

fn bench_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");

    // All prime, so every candidate divisor up to the square root is tried
    for input in [7i64, 29, 97, 997, 9973, 104_729].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, &input| {
            b.iter(|| is_prime(black_box(input)))
        });
    }

    group.finish();
}

fn bench_is_prime_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime_widths");

    // i32::MAX is prime, so this measures the per-divisor cost in each width
    const N: i32 = i32::MAX;
    group.bench_function("u32", |b| b.iter(|| black_box(N as u32).is_prime()));
    group.bench_function("i64", |b| b.iter(|| black_box(i64::from(N)).is_prime()));
    group.bench_function("u128", |b| b.iter(|| black_box(N as u128).is_prime()));

    group.finish();
}

criterion_group!(benches, bench_is_prime, bench_is_prime_widths);
criterion_main!(benches);

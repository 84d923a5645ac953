use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use goldilocks_core::B;
use std::time::Duration;

fn bench_add(c: &mut Criterion) {
    let a = B::from_value(0xDEAD_BEEF_CAFE_F00D);
    let b = B::from_value(0x1234_5678_9ABC_DEF0);
    c.bench_function("field/add", |bencher| bencher.iter(|| a + b));
}

fn bench_mul(c: &mut Criterion) {
    let a = B::from_value(0xDEAD_BEEF_CAFE_F00D);
    let b = B::from_value(0x1234_5678_9ABC_DEF0);
    c.bench_function("field/mul", |bencher| bencher.iter(|| a * b));
}

fn bench_inverse(c: &mut Criterion) {
    let a = B::from_value(0xDEAD_BEEF_CAFE_F00D);
    c.bench_function("field/inverse", |bencher| bencher.iter(|| a.inverse().unwrap()));
}

fn bench_mod_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("field/mod_pow");
    let a = B::from_value(0xDEAD_BEEF_CAFE_F00D);
    for exp in [16u64, 1024, 1 << 20].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(exp), exp, |bencher, &exp| {
            bencher.iter(|| a.mod_pow_u64(exp))
        });
    }
    group.finish();
}

fn bench_batch_inversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("field/batch_inversion");
    for size in [16usize, 256, 4096].iter() {
        let xs: Vec<B> = (1u64..=*size as u64).map(B::from_value).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| B::batch_inversion(&xs).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    name = field_benchmarks;
    config = Criterion::default().measurement_time(Duration::from_secs(3));
    targets = bench_add, bench_mul, bench_inverse, bench_mod_pow, bench_batch_inversion
);

criterion_main!(field_benchmarks);

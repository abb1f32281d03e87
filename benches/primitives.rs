use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use spsparse::{format_array, isnone, DuplicatePolicy};

fn sample_values(n: usize) -> Vec<f64> {
    // Every fourth value is zero and every seventh is NaN.
    (0..n)
        .map(|i| match (i % 4, i % 7) {
            (0, _) => 0.0,
            (_, 0) => f64::NAN,
            _ => i as f64 * 0.5,
        })
        .collect()
}

fn bench_isnone(c: &mut Criterion) {
    let values = sample_values(4096);
    let mut group = c.benchmark_group("primitives/isnone");
    group.throughput(Throughput::Elements(values.len() as u64));
    for zero_nan in [false, true] {
        group.bench_function(format!("zero_nan={zero_nan}"), |b| {
            b.iter(|| {
                values
                    .iter()
                    .filter(|v| isnone(black_box(**v), zero_nan))
                    .count()
            });
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let values = sample_values(4096);
    let mut group = c.benchmark_group("primitives/resolve");
    group.throughput(Throughput::Elements(values.len() as u64));
    for policy in DuplicatePolicy::ALL {
        group.bench_function(policy.name(), |b| {
            b.iter(|| {
                values
                    .iter()
                    .fold(f64::NAN, |acc, v| policy.resolve(acc, black_box(*v)))
            });
        });
    }
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let index = [12_usize, 4096, 7];
    c.bench_function("primitives/format_array_rank3", |b| {
        b.iter(|| format_array(black_box(&index)));
    });
}

criterion_group!(benches, bench_isnone, bench_resolve, bench_format);
criterion_main!(benches);

//! Micro-benchmarks for the four rational operators at a few representative precisions.
//!
//! Grounded in `examples/loyd-fixnum/benches/fixed_point.rs`: one `criterion_group` per
//! precision, built through a small macro instead of copy-pasted functions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use longnum::Number;

macro_rules! define_bench {
    ($name:ident, $precision:expr) => {
        #[allow(non_snake_case)]
        fn $name(c: &mut Criterion) {
            let mut group = c.benchmark_group(stringify!($name));

            group.bench_function("add", |b| {
                let lhs = black_box(Number::from_i64_with_precision(123, $precision));
                let rhs = black_box(Number::from_i64_with_precision(54321, $precision));
                b.iter(|| lhs.clone() + rhs.clone())
            });

            group.bench_function("mul", |b| {
                let lhs = black_box(Number::from_i64_with_precision(123, $precision));
                let rhs = black_box(Number::from_i64_with_precision(54321, $precision));
                b.iter(|| lhs.clone() * rhs.clone())
            });

            group.bench_function("div", |b| {
                let lhs = black_box(Number::from_i64_with_precision(987654, $precision));
                let rhs = black_box(Number::from_i64_with_precision(54321, $precision));
                b.iter(|| lhs.clone() / rhs.clone())
            });

            group.bench_function("to_string", |b| {
                let lhs = black_box(
                    Number::from_i64_with_precision(987654, $precision)
                        .checked_div(&Number::from_i64_with_precision(54321, $precision))
                        .unwrap(),
                );
                b.iter(|| lhs.to_string(10))
            });

            group.finish();
        }
    };
}

define_bench!(precision_64, 64);
define_bench!(precision_256, 256);
define_bench!(precision_4096, 4096);

criterion_group!(benches, precision_64, precision_256, precision_4096);
criterion_main!(benches);

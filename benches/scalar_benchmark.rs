use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use poly_scalar::{Complex64, Posit16_2, PositMath, Scalar, f16};

macro_rules! create_benchmark_for_type {
    ($c:expr, $type_name:ident, $type:ty, $value:expr) => {
        let mut group = $c.benchmark_group(stringify!($type_name));

        group.bench_function("construct_and_narrow", |b| {
            b.iter(|| {
                let scalar = Scalar::from(black_box($value));
                black_box(scalar.to::<$type>())
            })
        });
        group.bench_function("equal", |b| {
            let scalar = Scalar::from($value);
            b.iter(|| black_box(scalar.equal(black_box($value))))
        });
        group.bench_function("negate_and_log", |b| {
            let scalar = Scalar::from($value);
            b.iter(|| black_box(black_box(scalar).negate().map(|s| s.conj().log())))
        });
        group.finish();
    };
}

fn benchmark_scalar_kinds(c: &mut Criterion) {
    create_benchmark_for_type!(c, i64, i64, 1_234_567i64);
    create_benchmark_for_type!(c, f64, f64, 0.618_f64);
    create_benchmark_for_type!(c, F16, f16, f16::from_f32(0.618));
    create_benchmark_for_type!(c, Complex64, Complex64, Complex64::new(0.5, -1.5));
    create_benchmark_for_type!(c, Posit16_2, Posit16_2, Posit16_2::from_f64(0.618));
}

fn benchmark_posit_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("Posit16_2_math");
    let inputs: Vec<Posit16_2> = (1..=256u16).map(|i| Posit16_2::from_bits(i * 64)).collect();

    group.bench_function("from_f64", |b| {
        b.iter(|| {
            for i in 0..256 {
                black_box(Posit16_2::from_f64(black_box(i as f64 * 0.37)));
            }
        })
    });
    group.bench_function("mul_add", |b| {
        b.iter(|| {
            inputs
                .iter()
                .fold(Posit16_2::ZERO, |acc, &x| acc + x * black_box(x))
        })
    });
    group.bench_function("exp_log", |b| {
        b.iter(|| {
            for &x in &inputs {
                black_box(PositMath::log(PositMath::exp(black_box(x))));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, benchmark_scalar_kinds, benchmark_posit_math);
criterion_main!(benches);

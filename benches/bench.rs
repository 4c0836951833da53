use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use jubjub_curve::{FieldElement, Jubjub, Scalar};
use rand_core::OsRng;

pub fn field(c: &mut Criterion) {
    let mut group = c.benchmark_group("FieldElement");

    group.bench_function("mul", |b| {
        b.iter_batched(
            || {
                let a = FieldElement::random(&mut OsRng).unwrap();
                let b = FieldElement::random(&mut OsRng).unwrap();
                (a, b)
            },
            |(a, b)| a * b,
            BatchSize::SmallInput,
        )
    });

    group.bench_function("square", |b| {
        b.iter_batched(
            || FieldElement::random(&mut OsRng).unwrap(),
            |a| a.square(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("invert (InvEEA)", |b| {
        b.iter_batched(
            || FieldElement::random(&mut OsRng).unwrap(),
            |a| a.inv_eea(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("invert (InvMontDown)", |b| {
        b.iter_batched(
            || FieldElement::random(&mut OsRng).unwrap(),
            |a| a.invert_mont_down(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

pub fn curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Jubjub");

    group.bench_function("point addition", |b| {
        b.iter_batched(
            || {
                let s = Scalar::random(&mut OsRng).unwrap();
                let t = Scalar::random(&mut OsRng).unwrap();
                (Jubjub::mul_base(&s), Jubjub::mul_base(&t))
            },
            |(p, q)| Jubjub::add(&p, &q),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("point doubling", |b| {
        b.iter_batched(
            || {
                let s = Scalar::random(&mut OsRng).unwrap();
                Jubjub::mul_base(&s)
            },
            |p| p.double(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("scalar multiplication", |b| {
        b.iter_batched(
            || {
                let s = Scalar::random(&mut OsRng).unwrap();
                let p = Jubjub::mul_base(&s);
                let k = Scalar::random(&mut OsRng).unwrap();
                (p, k)
            },
            |(p, k)| Jubjub::mul(&p, &k),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("scalar multiplication (base)", |b| {
        b.iter_batched(
            || Scalar::random(&mut OsRng).unwrap(),
            |k| Jubjub::mul_base(&k),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, field, curve);
criterion_main!(benches);

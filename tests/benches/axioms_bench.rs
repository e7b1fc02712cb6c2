use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gfcheck_axioms::{
    check_distributivity, check_group_axioms, sample_associativity, FieldVerifier, VerifyConfig,
};
use gfcheck_field::{FieldAddition, FieldMultiplication, PrimeField};
use gfcheck_tests::test_rng;

fn bench_group_axioms(c: &mut Criterion) {
    let mut group = c.benchmark_group("GroupAxioms");

    for p in [7i64, 13, 31].iter() {
        let gf = PrimeField::new(*p).unwrap();
        let elements = gf.elements();
        let nonzero = gf.nonzero_elements();

        group.bench_with_input(BenchmarkId::new("additive", p), p, |b, _| {
            b.iter(|| check_group_axioms(&elements, &FieldAddition).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("multiplicative", p), p, |b, _| {
            b.iter(|| check_group_axioms(&nonzero, &FieldMultiplication).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("distributivity", p), p, |b, _| {
            b.iter(|| check_distributivity(&elements, &FieldAddition, &FieldMultiplication).unwrap());
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sampled");
    let gf = PrimeField::new(1021).unwrap();
    let elements = gf.elements();

    for samples in [256usize, 4096].iter() {
        group.bench_with_input(BenchmarkId::new("associativity", samples), samples, |b, &n| {
            let mut rng = test_rng(7);
            b.iter(|| sample_associativity(&elements, &FieldMultiplication, n, &mut rng).unwrap());
        });
    }

    group.finish();
}

fn bench_verifier(c: &mut Criterion) {
    let verifier = FieldVerifier::new(VerifyConfig::default().with_samples(1024)).unwrap();

    c.bench_function("FieldVerifier/13", |b| b.iter(|| verifier.verify(13).unwrap()));
    c.bench_function("FieldVerifier/257", |b| b.iter(|| verifier.verify(257).unwrap()));
}

criterion_group!(benches, bench_group_axioms, bench_sampling, bench_verifier);
criterion_main!(benches);

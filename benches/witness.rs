use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use zk_rsa_setup::circuit::{RsaSetupCircuit, RsaSetupParams};
use zk_rsa_setup::field::{Bls12381Fr, CircuitField, Fr};
use zk_rsa_setup::gadgets::{AndFold, RemainderPolicy};

fn bench_generate<F: CircuitField>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("witness_generate/{}", F::field_name()));
    let shapes = [
        (RemainderPolicy::Unconstrained, AndFold::Sequential),
        (RemainderPolicy::RangeChecked, AndFold::Sequential),
        (RemainderPolicy::RangeChecked, AndFold::BalancedTree),
    ];
    let inputs = RsaSetupCircuit::<F>::inputs(32771, 32779);
    for (policy, fold) in shapes {
        let params = RsaSetupParams::default()
            .with_remainder_policy(policy)
            .with_and_fold(fold);
        let circuit = RsaSetupCircuit::<F>::new(params).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{policy:?}/{fold:?}")),
            &circuit,
            |b, circuit| b.iter(|| black_box(circuit.description().program().generate(&inputs))),
        );
    }
    group.finish();
}

/// Benchmark: validation + generation + check, as a proof request runs it
fn bench_witness_end_to_end(c: &mut Criterion) {
    let circuit = RsaSetupCircuit::<Fr>::new(RsaSetupParams::default()).unwrap();
    c.bench_function("witness_checked/bit_length=16", |b| {
        b.iter(|| black_box(circuit.witness(black_box(32771), black_box(32779))))
    });
}

criterion_group!(
    benches,
    bench_generate::<Fr>,
    bench_generate::<Bls12381Fr>,
    bench_witness_end_to_end
);
criterion_main!(benches);

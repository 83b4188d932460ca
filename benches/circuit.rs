use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zk_rsa_setup::circuit::{RsaSetupCircuit, RsaSetupParams};
use zk_rsa_setup::export::r1cs_bytes;
use zk_rsa_setup::field::Fr;
use zk_rsa_setup::gadgets::RemainderPolicy;

/// Benchmark: building and finalizing the composite circuit
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsa_setup_build");
    for bit_length in [8usize, 12, 16, 24] {
        for policy in [RemainderPolicy::Unconstrained, RemainderPolicy::RangeChecked] {
            let params = RsaSetupParams::new(bit_length).with_remainder_policy(policy);
            group.bench_with_input(
                BenchmarkId::new(format!("{policy:?}"), bit_length),
                &params,
                |b, params| b.iter(|| black_box(RsaSetupCircuit::<Fr>::new(*params))),
            );
        }
    }
    group.finish();
}

/// Benchmark: constraint check of an honest witness
fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsa_setup_check");
    let circuit = RsaSetupCircuit::<Fr>::new(RsaSetupParams::default()).unwrap();
    let witness = circuit.witness(32771, 32779).unwrap();
    group.throughput(Throughput::Elements(circuit.description().num_constraints() as u64));
    group.bench_function("bit_length=16", |b| {
        b.iter(|| black_box(circuit.description().check(black_box(&witness))))
    });
    group.finish();
}

/// Benchmark: `.r1cs` serialization
fn bench_export(c: &mut Criterion) {
    let circuit = RsaSetupCircuit::<Fr>::new(RsaSetupParams::default()).unwrap();
    c.bench_function("r1cs_bytes/bit_length=16", |b| {
        b.iter(|| black_box(r1cs_bytes(circuit.description()).unwrap()))
    });
}

criterion_group!(benches, bench_build, bench_check, bench_export);
criterion_main!(benches);

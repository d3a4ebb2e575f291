//! # Call Engine Benchmarks
//!
//! Hot paths of one contract call:
//! - seed to key material derivation
//! - digest over envelope-sized inputs
//! - identity encode and checksum-verified decode
//! - building and signing a broadcast envelope
//! - a typed query through the mock session

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use shared_crypto::{decode_identity, digest, encode_identity, verify, KeyMaterial};
use std::time::Duration;
use tc_01_call_engine::{
    build_transaction, CallEngineService, MockNodeSession, MockReply, ProcedureInput, Wire,
};
use tc_02_contracts::{qbay, REGISTRY};

/// Random lowercase 55-letter seed.
fn random_seed() -> String {
    let mut rng = rand::thread_rng();
    (0..55).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn random_bytes(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

pub fn key_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tc-01/key_derivation");
    let seed = random_seed();

    group.bench_function("from_seed", |b| {
        b.iter(|| black_box(KeyMaterial::from_seed(black_box(&seed)).is_ok()))
    });

    group.finish();
}

pub fn envelope_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("tc-01/digest");

    // metadata plus: empty, small, largest contract payload, oversized
    for size in [80, 92, 532, 4_096] {
        let data = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(digest(data)))
        });
    }

    group.finish();
}

pub fn identity_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("tc-01/identity");
    let key: [u8; 32] = random_bytes(32).try_into().unwrap_or([7u8; 32]);
    let identity = encode_identity(&key);

    group.bench_function("encode", |b| b.iter(|| black_box(encode_identity(&key))));
    group.bench_function("decode", |b| {
        b.iter(|| black_box(decode_identity(&identity).is_ok()))
    });

    group.finish();
}

pub fn transaction_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tc-01/transaction");
    group.measurement_time(Duration::from_secs(10));

    let keys = match KeyMaterial::from_seed(&random_seed()) {
        Ok(keys) => keys,
        Err(_) => return,
    };
    let payload = qbay::ListInMarket {
        price: 5_000,
        nft_id: 31,
    }
    .to_bytes();
    let spec = &<qbay::ListInMarket as ProcedureInput>::SPEC;

    group.bench_function("build_and_sign", |b| {
        b.iter(|| black_box(build_transaction(spec, &payload, 0, 20_000_000, &keys)))
    });

    let built = build_transaction(spec, &payload, 0, 20_000_000, &keys);
    let envelope = built.envelope;
    group.bench_function("verify", |b| {
        b.iter(|| {
            black_box(verify(keys.public_key(), &built.pre_signature_digest, envelope.signature()).is_ok())
        })
    });

    // every registered procedure with a zeroed payload of its size
    for spec in REGISTRY.iter().filter(|s| s.is_procedure() && s.payload_len() > 64) {
        let payload = vec![0u8; spec.payload_len()];
        group.bench_with_input(BenchmarkId::new("build_large", spec.name), &payload, |b, p| {
            b.iter(|| black_box(build_transaction(spec, p, 0, 1, &keys)))
        });
    }

    group.finish();
}

pub fn typed_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("tc-01/query");
    let reply = vec![0u8; qbay::NftInfo::SIZE];

    group.bench_function("nft_info_mock", |b| {
        b.iter(|| {
            let session = MockNodeSession::default().reply(MockReply::Echo(reply.clone()));
            let mut service = CallEngineService::new(session);
            black_box(service.query(&qbay::GetInfoOfNftById { nft_id: 1 }).is_ok())
        })
    });

    group.finish();
}

/// Register every call engine benchmark with `c`.
pub fn register_benchmarks(c: &mut Criterion) {
    key_derivation(c);
    envelope_digest(c);
    identity_codec(c);
    transaction_build(c);
    typed_query(c);
}

//! # Tick-Client Call Engine Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | key derivation | < 1ms |
//! | digest of an 80..4096 byte envelope | < 10μs |
//! | build and sign one transaction | < 500μs |
//! | typed query through the mock session | < 50μs |

use criterion::{criterion_group, criterion_main};
use tc_tests::benchmarks::call_engine;

criterion_group!(
    benches,
    call_engine::key_derivation,
    call_engine::envelope_digest,
    call_engine::identity_codec,
    call_engine::transaction_build,
    call_engine::typed_query,
);

criterion_main!(benches);

//! # Tick-Client Benchmarks
//!
//! Criterion benchmarks of the call engine hot paths.

pub mod call_engine;

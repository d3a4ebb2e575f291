//! # Tick-Client Test Suite
//!
//! Unified test crate.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks of the hot paths
//! │   └── call_engine.rs
//! │
//! └── integration/      # Cross-crate flows
//!     ├── fake_node.rs        # loopback node speaking the frame protocol
//!     ├── contract_flows.rs   # contracts + call engine over MockNodeSession
//!     └── tcp_flows.rs        # same flows against a loopback fake node
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tc-tests
//!
//! # By category
//! cargo test -p tc-tests integration::
//!
//! # Benchmarks
//! cargo bench -p tc-tests
//! ```

pub mod benchmarks;
pub mod integration;

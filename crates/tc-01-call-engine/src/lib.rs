//! # TC-01 Contract Call Engine
//!
//! Builds, signs and dispatches contract procedure calls, and issues
//! read-only contract function queries, against a tick-based ledger node.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Every contract operation shares one protocol core:
//! - a fixed, tightly packed envelope layout
//! - a two-stage digest pipeline (sign over `metadata + payload`, identify
//!   the transaction by the digest over `metadata + payload + signature`)
//! - one-shot broadcast and one-shot request/response dispatch
//!
//! Contract-specific code only supplies a [`ContractCallSpec`] and a
//! [`Wire`] payload type.
//!
//! ## Envelope Layout
//!
//! | Part | Size | Broadcast | Query |
//! |------|------|-----------|-------|
//! | Header | 8 | dejavu = 0, type 24 | dejavu random, type 42 |
//! | TransactionMetadata | 80 | yes | - |
//! | FunctionDescriptor | 8 | - | yes |
//! | Payload | spec | yes | yes |
//! | Signature | 64 | yes | - |
//!
//! ## Module Structure
//!
//! ```text
//! tc-01-call-engine/
//! ├── domain/          # Wire codec, header, metadata, envelopes, call specs, errors
//! ├── algorithms/      # Addressing, digests, envelope builder, query codec
//! ├── ports/           # ContractCallApi, NodeSession (+ MockNodeSession)
//! ├── adapters/        # TcpNodeSession
//! └── service.rs       # CallEngineService (broadcast + query dispatch)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Used by `wire_struct!` expansions in downstream crates.
#[doc(hidden)]
pub use bytes;

// Re-exports
pub use adapters::{SessionTimeouts, TcpNodeSession};
pub use algorithms::{
    build_query, build_transaction, contract_index_of, contract_public_key, decode_reply,
    post_signature_digest, pre_signature_digest, scheduled_tick, tx_hash, BuiltTransaction,
};
pub use domain::{
    BroadcastReceipt, CallError, CallKind, CallRegistry, ContractCallSpec, CurrentTickInfo,
    DecodeError, FunctionDescriptor, FunctionInput, MessageType, Packet, ProcedureInput,
    PublicKey, QueryEnvelope, RequestResponseHeader, SignedEnvelope, TransactionMetadata,
    TransportError, TxHash, Wire, HEADER_SIZE, MAX_ENVELOPE_SIZE, METADATA_SIZE,
};
pub use ports::{ContractCallApi, MockNodeSession, MockReply, NodeSession};
pub use service::CallEngineService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

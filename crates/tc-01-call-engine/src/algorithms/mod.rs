//! # Algorithms Module
//!
//! Pure functions over domain types: contract addressing, the two-stage
//! digest pipeline, envelope assembly and the query codec.

pub mod addressing;
pub mod digest;
pub mod envelope_builder;
pub mod query;

pub use addressing::{contract_index_of, contract_public_key};
pub use digest::{post_signature_digest, pre_signature_digest, tx_hash};
pub use envelope_builder::{build_transaction, scheduled_tick, BuiltTransaction};
pub use query::{build_query, decode_reply};

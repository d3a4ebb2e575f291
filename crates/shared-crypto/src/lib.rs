//! # Shared Crypto - Ledger Key and Digest Primitives
//!
//! Leaf collaborators of the call engine. Nothing here knows about envelopes,
//! contracts or the network; everything works on fixed-size byte arrays.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | BLAKE3 | 32-byte digests (signing input, tx hash) |
//! | `signatures` | Ed25519 | 64-byte signatures over digests |
//! | `keys` | seed → subseed → private → public | Per-call key material |
//! | `identity` | base-26 + checksum | Human-readable public keys and tx hashes |
//!
//! ## Security Properties
//!
//! - **KeyMaterial** is zeroized on drop and never serialized
//! - **Ed25519**: deterministic nonces, no RNG dependency when signing
//! - **Identity**: 18-bit checksum catches transcription errors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod identity;
pub mod keys;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{digest, digest_many, Digest, DigestHasher};
pub use identity::{
    decode_identity, encode_identity, encode_tx_hash, Identity, IDENTITY_LEN,
};
pub use keys::{KeyMaterial, Seed, SEED_LEN};
pub use signatures::{verify, Signature, SIGNATURE_SIZE};

/// Size of public keys, private keys and digests.
pub const KEY_SIZE: usize = 32;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

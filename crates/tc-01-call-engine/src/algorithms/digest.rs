//! # Digest Pipeline
//!
//! Two digests per transaction, over two different byte ranges:
//!
//! 1. pre-signature: `metadata ++ payload` (the signing input)
//! 2. post-signature: `metadata ++ payload ++ signature` (the tracking id)
//!
//! The header is never part of either range.

use crate::domain::{TransactionMetadata, TxHash, Wire};
use shared_crypto::{digest_many, encode_tx_hash, Digest, Signature};

/// Digest the signature is taken over.
pub fn pre_signature_digest(metadata: &TransactionMetadata, payload: &[u8]) -> Digest {
    digest_many(&[&metadata.to_bytes(), payload])
}

/// Digest identifying the signed transaction.
pub fn post_signature_digest(
    metadata: &TransactionMetadata,
    payload: &[u8],
    signature: &Signature,
) -> Digest {
    digest_many(&[&metadata.to_bytes(), payload, signature.as_bytes()])
}

/// Human-readable tracking hash of a post-signature digest.
pub fn tx_hash(post_signature_digest: &Digest) -> TxHash {
    TxHash(encode_tx_hash(post_signature_digest))
}

//! # Transaction Envelope Builder
//!
//! `metadata ++ payload` is digested and signed; the frame is then
//! `header ++ metadata ++ payload ++ signature` with a zero dejavu.

use super::addressing::contract_public_key;
use super::digest::pre_signature_digest;
use crate::domain::{ContractCallSpec, PublicKey, SignedEnvelope, TransactionMetadata};
use shared_crypto::{Digest, KeyMaterial};
use tracing::debug;

/// A signed envelope and the digest its signature covers.
#[derive(Clone, Debug)]
pub struct BuiltTransaction {
    /// Frame to send.
    pub envelope: SignedEnvelope,
    /// Signing input, kept for the receipt.
    pub pre_signature_digest: Digest,
}

/// Tick a transaction is scheduled for.
pub fn scheduled_tick(current_tick: u32, offset: u32) -> u32 {
    current_tick.saturating_add(offset)
}

/// Build and sign a procedure call.
///
/// # Panics
///
/// If `spec` is not a procedure, or `payload` is not exactly
/// `spec.payload_size` bytes long.
pub fn build_transaction(
    spec: &ContractCallSpec,
    payload: &[u8],
    amount: u64,
    tick: u32,
    keys: &KeyMaterial,
) -> BuiltTransaction {
    assert!(
        spec.is_procedure(),
        "{} is a function and cannot be broadcast",
        spec.name
    );
    assert_eq!(
        payload.len(),
        spec.payload_len(),
        "payload size mismatch for {}",
        spec.name
    );

    let metadata = TransactionMetadata {
        source_public_key: PublicKey(*keys.public_key()),
        destination_public_key: contract_public_key(spec.contract_index),
        amount,
        tick,
        input_type: spec.operation_id,
        input_size: spec.payload_size,
    };

    let digest = pre_signature_digest(&metadata, payload);
    let signature = keys.sign(&digest);

    debug!(
        "[tc-01] built {} for contract {} at tick {}",
        spec.name, spec.contract_index, tick
    );

    BuiltTransaction {
        envelope: SignedEnvelope::new(metadata, payload.to_vec(), signature),
        pre_signature_digest: digest,
    }
}

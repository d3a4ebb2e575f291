//! # Ed25519 Signatures
//!
//! Signatures are always taken over a 32-byte digest, never over raw
//! envelope bytes. Signing lives on [`crate::KeyMaterial`]; verification only
//! needs the public key.

use crate::CryptoError;
use ed25519_dalek::{Verifier, VerifyingKey};

/// Encoded signature size in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// Ed25519 signature (64 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature(pub(crate) [u8; SIGNATURE_SIZE]);

impl Signature {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }
}

/// Verify `signature` over `message` against a raw 32-byte public key.
pub fn verify(
    public_key: &[u8; 32],
    message: &[u8],
    signature: &Signature,
) -> Result<(), CryptoError> {
    let verifying_key =
        VerifyingKey::from_bytes(public_key).map_err(|_| CryptoError::InvalidPublicKey)?;
    let sig = ed25519_dalek::Signature::from_bytes(&signature.0);

    verifying_key
        .verify(message, &sig)
        .map_err(|_| CryptoError::SignatureVerificationFailed)
}

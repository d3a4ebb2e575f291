//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Seed is not 55 lowercase ASCII letters
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// Identity string failed to decode
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    /// Public key bytes are not a curve point
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CryptoError::InvalidSeed("expected 55 letters, got 3".into());
        assert!(err.to_string().contains("55 letters"));

        let err = CryptoError::SignatureVerificationFailed;
        assert_eq!(err.to_string(), "Signature verification failed");
    }
}

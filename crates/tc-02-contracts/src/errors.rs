//! # Contract Argument Errors
//!
//! Raised while turning user-facing arguments into payload values.

use shared_crypto::CryptoError;
use thiserror::Error;

/// Invalid argument for a contract payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Neither a valid identity nor 64 hex characters.
    #[error("Invalid public key '{input}': {reason}")]
    InvalidPublicKey {
        /// Offending input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// Asset names hold at most 7 ASCII characters.
    #[error("Invalid asset name '{0}': expected 1-7 ASCII alphanumerics")]
    InvalidAssetName(String),

    /// ICO phases are 1, 2 or 3.
    #[error("Invalid ICO phase {0}: expected 1, 2 or 3")]
    InvalidPhase(u32),
}

impl ContractError {
    pub(crate) fn key(input: &str, err: CryptoError) -> Self {
        Self::InvalidPublicKey {
            input: input.to_string(),
            reason: err.to_string(),
        }
    }
}

//! Contracts are addressed by a public key holding the contract index as a
//! little-endian u64 in bytes `0..8`; bytes `8..32` are zero.

use crate::domain::PublicKey;

/// Destination key of contract `index`.
pub fn contract_public_key(index: u32) -> PublicKey {
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&u64::from(index).to_le_bytes());
    PublicKey(key)
}

/// Contract index encoded in `key`, if it is a contract address.
pub fn contract_index_of(key: &PublicKey) -> Option<u64> {
    let bytes = key.as_bytes();
    if bytes[8..].iter().any(|&b| b != 0) {
        return None;
    }
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[..8]);
    Some(u64::from_le_bytes(word))
}

//! # Identity Codec
//!
//! A 32-byte public key is shown as 60 letters: four 14-letter base-26
//! renderings of its little-endian u64 words, then a 4-letter checksum taken
//! from the low 18 bits of the key's digest. Public keys use `A..Z`;
//! transaction hashes use the same encoding in `a..z`.

use crate::hashing::digest;
use crate::CryptoError;
use std::fmt;

/// Number of characters in an encoded identity.
pub const IDENTITY_LEN: usize = 60;

const WORD_LETTERS: usize = 14;
const BODY_LEN: usize = 4 * WORD_LETTERS;
const CHECKSUM_MASK: u32 = 0x3_FFFF;

/// Human-readable form of a public key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// Encode a public key.
    pub fn from_public_key(public_key: &[u8; 32]) -> Self {
        Self(encode(public_key, b'A'))
    }

    /// Parse and validate an identity string.
    pub fn parse(s: &str) -> Result<Self, CryptoError> {
        decode_identity(s)?;
        Ok(Self(s.to_string()))
    }

    /// Public key bytes.
    pub fn public_key(&self) -> [u8; 32] {
        // Validated at construction.
        decode_identity(&self.0).unwrap_or([0u8; 32])
    }

    /// String form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode a public key as an uppercase identity string.
pub fn encode_identity(public_key: &[u8; 32]) -> String {
    encode(public_key, b'A')
}

/// Encode a post-signature digest as a lowercase transaction hash.
pub fn encode_tx_hash(post_signature_digest: &[u8; 32]) -> String {
    encode(post_signature_digest, b'a')
}

/// Decode an uppercase identity back to its public key.
pub fn decode_identity(s: &str) -> Result<[u8; 32], CryptoError> {
    let bytes = s.as_bytes();
    if bytes.len() != IDENTITY_LEN {
        return Err(CryptoError::InvalidIdentity(format!(
            "expected {} characters, got {}",
            IDENTITY_LEN,
            bytes.len()
        )));
    }
    if let Some(pos) = bytes.iter().position(|b| !b.is_ascii_uppercase()) {
        return Err(CryptoError::InvalidIdentity(format!(
            "character {} is not in A..Z",
            pos
        )));
    }

    let mut public_key = [0u8; 32];
    for (word_index, chunk) in bytes[..BODY_LEN].chunks(WORD_LETTERS).enumerate() {
        let mut word: u64 = 0;
        for &letter in chunk.iter().rev() {
            word = word
                .checked_mul(26)
                .and_then(|w| w.checked_add(u64::from(letter - b'A')))
                .ok_or_else(|| {
                    CryptoError::InvalidIdentity(format!("word {} overflows", word_index))
                })?;
        }
        public_key[word_index * 8..word_index * 8 + 8].copy_from_slice(&word.to_le_bytes());
    }

    if checksum_letters(&public_key, b'A') != bytes[BODY_LEN..] {
        return Err(CryptoError::InvalidIdentity("checksum mismatch".into()));
    }
    Ok(public_key)
}

fn encode(key: &[u8; 32], base: u8) -> String {
    let mut out = Vec::with_capacity(IDENTITY_LEN);
    for chunk in key.chunks_exact(8) {
        let mut word = u64::from_le_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
        ]);
        for _ in 0..WORD_LETTERS {
            out.push(base + (word % 26) as u8);
            word /= 26;
        }
    }
    out.extend_from_slice(&checksum_letters(key, base));
    // Only ASCII letters were pushed.
    String::from_utf8(out).unwrap_or_default()
}

fn checksum_letters(key: &[u8; 32], base: u8) -> [u8; 4] {
    let d = digest(key);
    let mut checksum = (u32::from(d[0]) | u32::from(d[1]) << 8 | u32::from(d[2]) << 16)
        & CHECKSUM_MASK;
    let mut letters = [0u8; 4];
    for letter in letters.iter_mut() {
        *letter = base + (checksum % 26) as u8;
        checksum /= 26;
    }
    letters
}

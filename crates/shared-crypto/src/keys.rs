//! # Key Derivation
//!
//! `seed (55 × a..z) → subseed → private key → public key`
//!
//! Each arrow is one digest, except the last which is the Ed25519 public
//! key of the private key. [`KeyMaterial`] lives for one signing operation
//! and wipes its secrets when dropped.

use crate::hashing::digest;
use crate::signatures::{Signature, SIGNATURE_SIZE};
use crate::CryptoError;
use ed25519_dalek::{Signer, SigningKey};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Required seed length in characters.
pub const SEED_LEN: usize = 55;

/// Caller-supplied secret seed, validated and zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Parse a seed string. Only lowercase ASCII letters are accepted.
    pub fn parse(seed: &str) -> Result<Self, CryptoError> {
        let bytes = seed.as_bytes();
        if bytes.len() != SEED_LEN {
            return Err(CryptoError::InvalidSeed(format!(
                "expected {} letters, got {}",
                SEED_LEN,
                bytes.len()
            )));
        }
        let mut out = [0u8; SEED_LEN];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_lowercase() {
                out.zeroize();
                return Err(CryptoError::InvalidSeed(format!(
                    "character {} is not in a..z",
                    i
                )));
            }
            out[i] = b - b'a';
        }
        Ok(Self(out))
    }

    /// Subseed digest of the letter values.
    fn subseed(&self) -> [u8; 32] {
        digest(&self.0)
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// Private and public key of one signer.
#[derive(ZeroizeOnDrop)]
pub struct KeyMaterial {
    private_key: [u8; 32],
    #[zeroize(skip)]
    public_key: [u8; 32],
}

impl KeyMaterial {
    /// Derive key material from a seed string.
    pub fn from_seed(seed: &str) -> Result<Self, CryptoError> {
        let seed = Seed::parse(seed)?;
        Ok(Self::derive(&seed))
    }

    /// Derive key material from an already validated seed.
    pub fn derive(seed: &Seed) -> Self {
        let mut subseed = seed.subseed();
        let private_key = digest(&subseed);
        subseed.zeroize();

        let signing_key = SigningKey::from_bytes(&private_key);
        let public_key = signing_key.verifying_key().to_bytes();
        Self {
            private_key,
            public_key,
        }
    }

    /// Public key bytes.
    pub fn public_key(&self) -> &[u8; 32] {
        &self.public_key
    }

    /// Sign a 32-byte digest.
    pub fn sign(&self, digest: &[u8; 32]) -> Signature {
        let signing_key = SigningKey::from_bytes(&self.private_key);
        let sig: [u8; SIGNATURE_SIZE] = signing_key.sign(digest).to_bytes();
        Signature(sig)
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

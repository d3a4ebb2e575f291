//! # BLAKE3 Digests
//!
//! The single digest primitive of the ledger protocol. Every digest the call
//! engine computes (subseed, private key, pre-signature, post-signature,
//! identity checksum) is a 32-byte BLAKE3 output.

use blake3::Hasher;

/// 32-byte digest output.
pub type Digest = [u8; 32];

/// Streaming digest over several non-contiguous byte ranges.
pub struct DigestHasher {
    inner: Hasher,
}

impl DigestHasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Hasher::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return the digest.
    pub fn finalize(&self) -> Digest {
        *self.inner.finalize().as_bytes()
    }
}

impl Default for DigestHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Digest a contiguous byte range (one-shot).
pub fn digest(data: &[u8]) -> Digest {
    *blake3::hash(data).as_bytes()
}

/// Digest the concatenation of several ranges without copying them together.
pub fn digest_many(inputs: &[&[u8]]) -> Digest {
    let mut hasher = DigestHasher::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}

//! Human-readable rendering of decoded contract outputs.

use shared_crypto::encode_identity;
use tc_01_call_engine::PublicKey;

/// Render a decoded output for display. Public keys become identities.
pub trait Describe {
    /// Multi-line `field: value` text.
    fn describe(&self) -> String;
}

impl Describe for u32 {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Describe for u64 {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Describe for PublicKey {
    fn describe(&self) -> String {
        identity(self)
    }
}

/// Identity text of `key`.
pub(crate) fn identity(key: &PublicKey) -> String {
    encode_identity(key.as_bytes())
}

/// Text up to the first NUL, lossily decoded.
pub(crate) fn nul_terminated(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// Collects `name: value` lines.
#[derive(Default)]
pub(crate) struct Lines(Vec<String>);

impl Lines {
    pub(crate) fn field(mut self, name: &str, value: impl std::fmt::Display) -> Self {
        self.0.push(format!("{}: {}", name, value));
        self
    }

    pub(crate) fn key(self, name: &str, key: &PublicKey) -> Self {
        self.field(name, identity(key))
    }

    pub(crate) fn finish(self) -> String {
        self.0.join("\n")
    }
}

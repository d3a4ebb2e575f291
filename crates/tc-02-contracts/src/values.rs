//! # Payload Value Types
//!
//! Small encoders shared by several contracts: asset names, fixed URI
//! fields, payment methods and the fixed invocation amounts.

use crate::describe::nul_terminated;
use crate::errors::ContractError;
use shared_crypto::{decode_identity, encode_identity};
use std::fmt;
use tc_01_call_engine::bytes::BytesMut;
use tc_01_call_engine::{DecodeError, PublicKey, Wire};

/// Amount attached to `qbay.mint`.
pub const QBAY_MINT_FEE: u64 = 5_000_000;

/// Amount attached to `qbay.transfer_share_management_rights`.
pub const QBAY_TRANSFER_RIGHTS_FEE: u64 = 1_000_000;

/// Amount attached to `qip.transfer_share_management_rights`.
pub const QIP_TRANSFER_RIGHTS_FEE: u64 = 100;

/// Amount attached to `vottun_bridge.create_order`.
pub const BRIDGE_ORDER_FEE: u64 = 1_000;

/// Unit price used for `qip.buy_token` when the ICO cannot be looked up.
pub const QIP_FALLBACK_UNIT_PRICE: u64 = 1_000_000;

/// Accept either a 60-letter identity or 64 hex characters.
pub fn parse_public_key(input: &str) -> Result<PublicKey, ContractError> {
    let trimmed = input.trim();
    if trimmed.len() == 64 && trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
        let mut key = [0u8; 32];
        hex::decode_to_slice(trimmed, &mut key).map_err(|e| ContractError::InvalidPublicKey {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        return Ok(PublicKey(key));
    }
    decode_identity(trimmed)
        .map(PublicKey)
        .map_err(|e| ContractError::key(input, e))
}

// =============================================================================
// ASSET NAME
// =============================================================================

/// Up to seven ASCII characters packed little-endian into a u64.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AssetName(pub u64);

impl AssetName {
    /// Maximum number of characters.
    pub const MAX_LEN: usize = 7;

    /// Pack `name`; the eighth byte always stays zero.
    pub fn parse(name: &str) -> Result<Self, ContractError> {
        if name.is_empty()
            || name.len() > Self::MAX_LEN
            || !name.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(ContractError::InvalidAssetName(name.to_string()));
        }
        let mut raw = [0u8; 8];
        raw[..name.len()].copy_from_slice(name.as_bytes());
        Ok(Self(u64::from_le_bytes(raw)))
    }

    /// Characters up to the first NUL.
    pub fn as_string(&self) -> String {
        nul_terminated(&self.0.to_le_bytes())
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl Wire for AssetName {
    const SIZE: usize = 8;

    fn encode(&self, out: &mut BytesMut) {
        self.0.encode(out);
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        u64::decode(buf).map(Self)
    }
}

// =============================================================================
// URI FIELD
// =============================================================================

/// 64-byte NUL-padded text field. The last byte is always NUL on encode.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Uri64(pub [u8; 64]);

impl Uri64 {
    /// Field width in bytes.
    pub const LEN: usize = 64;

    /// Copy `text`, truncated to 63 bytes.
    pub fn new(text: &str) -> Self {
        let mut raw = [0u8; Self::LEN];
        let take = text.len().min(Self::LEN - 1);
        raw[..take].copy_from_slice(&text.as_bytes()[..take]);
        Self(raw)
    }

    /// Text up to the first NUL, lossily decoded.
    pub fn as_string(&self) -> String {
        nul_terminated(&self.0)
    }
}

impl Default for Uri64 {
    fn default() -> Self {
        Self([0u8; Self::LEN])
    }
}

impl fmt::Debug for Uri64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uri64({:?})", self.as_string())
    }
}

impl fmt::Display for Uri64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl Wire for Uri64 {
    const SIZE: usize = Self::LEN;

    fn encode(&self, out: &mut BytesMut) {
        let mut raw = self.0;
        raw[Self::LEN - 1] = 0;
        raw.encode(out);
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        <[u8; 64]>::decode(buf).map(Self)
    }
}

// =============================================================================
// PAYMENT METHOD
// =============================================================================

/// Currency a QBAY trade settles in. Encoded as one byte, `Cfb` = 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    /// Native currency; the price travels as the invocation amount.
    #[default]
    Qubic,
    /// CFB token; settled by the contract, nothing attached.
    Cfb,
}

impl PaymentMethod {
    /// Amount to attach to a transaction offering `price`.
    pub fn invocation_amount(self, price: u64) -> u64 {
        match self {
            Self::Qubic => price,
            Self::Cfb => 0,
        }
    }

    /// Parse `qubic` or `cfb`, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "qubic" => Some(Self::Qubic),
            "cfb" => Some(Self::Cfb),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Qubic => write!(f, "qubic"),
            Self::Cfb => write!(f, "cfb"),
        }
    }
}

impl Wire for PaymentMethod {
    const SIZE: usize = 1;

    fn encode(&self, out: &mut BytesMut) {
        matches!(self, Self::Cfb).encode(out);
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        Ok(if bool::decode(buf)? { Self::Cfb } else { Self::Qubic })
    }
}

// =============================================================================
// ASSET
// =============================================================================

tc_01_call_engine::wire_struct! {
    /// An issued asset: issuer plus packed name.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Asset {
        /// Issuer public key
        pub issuer: PublicKey,
        /// Packed name
        pub asset_name: AssetName,
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.asset_name, encode_identity(self.issuer.as_bytes()))
    }
}

//! # Domain Entities
//!
//! Byte-exact values exchanged with the node, plus the client-side receipt
//! of a broadcast.

use super::errors::DecodeError;
use super::header::{MessageType, RequestResponseHeader, HEADER_SIZE};
use super::wire::{ensure_remaining, Wire};
use bytes::{Buf, BufMut, BytesMut};
use shared_crypto::{encode_identity, Digest, Signature, SIGNATURE_SIZE};
use std::fmt;

/// Encoded size of [`TransactionMetadata`].
pub const METADATA_SIZE: usize = 80;

/// Opaque 32-byte public key. Rendered as an identity only for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; 32]);

impl PublicKey {
    /// All-zero key.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Wire for PublicKey {
    const SIZE: usize = 32;

    fn encode(&self, out: &mut BytesMut) {
        out.put_slice(&self.0);
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        ensure_remaining(buf, 32)?;
        let mut key = [0u8; 32];
        buf.copy_to_slice(&mut key);
        Ok(Self(key))
    }
}

crate::wire_struct! {
    /// Transaction metadata preceding the payload of every broadcast.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct TransactionMetadata {
        /// Signer's public key.
        pub source_public_key: PublicKey,
        /// Contract address (index in the first 8 bytes).
        pub destination_public_key: PublicKey,
        /// Invocation amount.
        pub amount: u64,
        /// Scheduled tick.
        pub tick: u32,
        /// Procedure id.
        pub input_type: u16,
        /// Encoded payload size.
        pub input_size: u16,
    }
}

crate::wire_struct! {
    /// Function-call descriptor preceding the input of every query.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FunctionDescriptor {
        /// Target contract index.
        pub contract_index: u32,
        /// Function id.
        pub input_type: u16,
        /// Encoded input size.
        pub input_size: u16,
    }
}

crate::wire_struct! {
    /// Body of a `RespondCurrentTickInfo` frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct CurrentTickInfo {
        /// Duration of the last tick in seconds.
        pub tick_duration: u16,
        /// Current epoch.
        pub epoch: u16,
        /// Current tick.
        pub tick: u32,
        /// Votes agreeing with the tick.
        pub number_of_aligned_votes: u16,
        /// Votes disagreeing with the tick.
        pub number_of_misaligned_votes: u16,
        /// First tick of the epoch.
        pub initial_tick: u32,
    }
}

/// One framed packet received from the node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packet {
    /// Frame header.
    pub header: RequestResponseHeader,
    /// Frame body (size = `header.body_size()`).
    pub body: Vec<u8>,
}

impl Packet {
    /// Build a packet whose header size matches `body`.
    pub fn new(message_type: MessageType, dejavu: u32, body: Vec<u8>) -> Self {
        let header = RequestResponseHeader::new(message_type, HEADER_SIZE + body.len(), dejavu);
        Self { header, body }
    }

    /// Split a complete frame into header and body.
    pub fn parse(frame: &[u8]) -> Result<Self, DecodeError> {
        let mut buf = frame;
        let header = RequestResponseHeader::decode(&mut buf)?;
        if header.size() != frame.len() {
            return Err(DecodeError::SizeMismatch {
                expected: header.size(),
                actual: frame.len(),
            });
        }
        Ok(Self {
            header,
            body: buf.to_vec(),
        })
    }

    /// Header + body bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = BytesMut::with_capacity(self.header.size());
        self.header.encode(&mut out);
        out.put_slice(&self.body);
        out.to_vec()
    }
}

/// Signed broadcast: header + metadata + payload + signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedEnvelope {
    header: RequestResponseHeader,
    metadata: TransactionMetadata,
    payload: Vec<u8>,
    signature: Signature,
}

impl SignedEnvelope {
    /// Assemble an envelope; the header size is derived from the parts.
    pub fn new(metadata: TransactionMetadata, payload: Vec<u8>, signature: Signature) -> Self {
        let total = HEADER_SIZE + METADATA_SIZE + payload.len() + SIGNATURE_SIZE;
        Self {
            header: RequestResponseHeader::broadcast(total),
            metadata,
            payload,
            signature,
        }
    }

    /// Parse a complete broadcast frame.
    pub fn parse(frame: &[u8]) -> Result<Self, DecodeError> {
        let packet = Packet::parse(frame)?;
        if packet.header.type_tag() != MessageType::BroadcastTransaction as u8 {
            return Err(DecodeError::UnexpectedMessageType {
                expected: MessageType::BroadcastTransaction as u8,
                actual: packet.header.type_tag(),
            });
        }
        let mut buf = packet.body.as_slice();
        let metadata = TransactionMetadata::decode(&mut buf)?;
        let payload_size = usize::from(metadata.input_size);
        if buf.len() != payload_size + SIGNATURE_SIZE {
            return Err(DecodeError::SizeMismatch {
                expected: payload_size + SIGNATURE_SIZE,
                actual: buf.len(),
            });
        }
        let payload = buf[..payload_size].to_vec();
        let mut sig = [0u8; SIGNATURE_SIZE];
        sig.copy_from_slice(&buf[payload_size..]);
        Ok(Self {
            header: packet.header,
            metadata,
            payload,
            signature: Signature::from_bytes(sig),
        })
    }

    /// Frame header.
    pub fn header(&self) -> &RequestResponseHeader {
        &self.header
    }

    /// Transaction metadata.
    pub fn metadata(&self) -> &TransactionMetadata {
        &self.metadata
    }

    /// Contract payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Signature over the pre-signature digest.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Total frame size.
    pub fn len(&self) -> usize {
        self.header.size()
    }

    /// Always false; an envelope holds at least header and metadata.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `metadata + payload`: the bytes covered by the signature.
    pub fn signed_range(&self) -> Vec<u8> {
        let mut out = BytesMut::with_capacity(METADATA_SIZE + self.payload.len());
        self.metadata.encode(&mut out);
        out.put_slice(&self.payload);
        out.to_vec()
    }

    /// Full frame bytes, ready to send.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = BytesMut::with_capacity(self.len());
        self.header.encode(&mut out);
        self.metadata.encode(&mut out);
        out.put_slice(&self.payload);
        out.put_slice(self.signature.as_bytes());
        out.to_vec()
    }
}

/// Unsigned query: header + descriptor + input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryEnvelope {
    /// Frame header (random dejavu).
    pub header: RequestResponseHeader,
    /// Function descriptor.
    pub descriptor: FunctionDescriptor,
    /// Input payload bytes.
    pub input: Vec<u8>,
}

impl QueryEnvelope {
    /// Full frame bytes, ready to send.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = BytesMut::with_capacity(self.header.size());
        self.header.encode(&mut out);
        self.descriptor.encode(&mut out);
        out.put_slice(&self.input);
        out.to_vec()
    }
}

/// Client-side transaction identifier (lowercase identity encoding of the
/// post-signature digest). Never transmitted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TxHash(pub String);

impl TxHash {
    /// String form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the caller gets back from a successful broadcast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BroadcastReceipt {
    /// Tracking hash.
    pub tx_hash: TxHash,
    /// Tick the transaction is scheduled for.
    pub tick: u32,
    /// Metadata as sent.
    pub metadata: TransactionMetadata,
    /// Payload as sent.
    pub payload: Vec<u8>,
    /// Digest the signature was taken over.
    pub pre_signature_digest: Digest,
}

impl BroadcastReceipt {
    /// One-line pointer for out-of-band confirmation polling.
    pub fn confirmation_hint(&self) -> String {
        format!(
            "look up {} once tick {} has been processed",
            self.tx_hash, self.tick
        )
    }
}

impl fmt::Display for BroadcastReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.metadata;
        writeln!(f, "Transaction broadcast")?;
        writeln!(f, "  from:         {}", encode_identity(m.source_public_key.as_bytes()))?;
        writeln!(f, "  to:           {}", encode_identity(m.destination_public_key.as_bytes()))?;
        writeln!(f, "  amount:       {}", m.amount)?;
        writeln!(f, "  tick:         {}", m.tick)?;
        writeln!(f, "  input type:   {}", m.input_type)?;
        writeln!(f, "  input size:   {}", m.input_size)?;
        writeln!(f, "  payload:      {}", hex::encode(&self.payload))?;
        write!(f, "  tx hash:      {}", self.tx_hash)
    }
}

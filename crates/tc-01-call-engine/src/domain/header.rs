//! # Request/Response Header
//!
//! Every frame on the node connection starts with the same 8 bytes:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 3 | total frame size, u24 LE (header included) |
//! | 3 | 1 | message type |
//! | 4 | 4 | dejavu (anti-replay / request correlation) |

use super::errors::DecodeError;
use super::wire::{ensure_remaining, Wire};
use bytes::{Buf, BufMut, BytesMut};

/// Encoded header size.
pub const HEADER_SIZE: usize = 8;

/// Largest frame the 24-bit size field can describe.
pub const MAX_ENVELOPE_SIZE: usize = 0x00FF_FFFF;

/// Message type tags used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageType {
    /// Unsolicited peer list gossip, pushed by nodes on connect.
    ExchangePublicPeers = 0,
    /// Signed transaction broadcast.
    BroadcastTransaction = 24,
    /// Ask for the node's current tick.
    RequestCurrentTickInfo = 27,
    /// Current tick reply.
    RespondCurrentTickInfo = 28,
    /// Terminates a multi-packet reply; empty body.
    EndResponse = 35,
    /// Contract function query.
    RequestContractFunction = 42,
    /// Contract function reply.
    RespondContractFunction = 43,
}

impl TryFrom<u8> for MessageType {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::ExchangePublicPeers),
            24 => Ok(Self::BroadcastTransaction),
            27 => Ok(Self::RequestCurrentTickInfo),
            28 => Ok(Self::RespondCurrentTickInfo),
            35 => Ok(Self::EndResponse),
            42 => Ok(Self::RequestContractFunction),
            43 => Ok(Self::RespondContractFunction),
            other => Err(DecodeError::InvalidField(format!(
                "unknown message type {}",
                other
            ))),
        }
    }
}

/// Frame header.
///
/// `message_type` is kept as the raw tag so that frames of types this client
/// does not model can still be read and skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestResponseHeader {
    size: u32,
    message_type: u8,
    dejavu: u32,
}

impl RequestResponseHeader {
    /// Header for a frame of `total_size` bytes.
    ///
    /// # Panics
    ///
    /// If `total_size` is smaller than the header or exceeds
    /// [`MAX_ENVELOPE_SIZE`].
    pub fn new(message_type: MessageType, total_size: usize, dejavu: u32) -> Self {
        assert!(
            (HEADER_SIZE..=MAX_ENVELOPE_SIZE).contains(&total_size),
            "frame size {} out of range",
            total_size
        );
        Self {
            size: total_size as u32,
            message_type: message_type as u8,
            dejavu,
        }
    }

    /// Broadcast header: dejavu is always zero.
    pub fn broadcast(total_size: usize) -> Self {
        Self::new(MessageType::BroadcastTransaction, total_size, 0)
    }

    /// Header carrying a fresh random, non-zero dejavu.
    pub fn with_random_dejavu(message_type: MessageType, total_size: usize) -> Self {
        Self::new(message_type, total_size, random_dejavu())
    }

    /// Total frame size, header included.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Body size (frame size minus header).
    pub fn body_size(&self) -> usize {
        self.size().saturating_sub(HEADER_SIZE)
    }

    /// Raw message type tag.
    pub fn type_tag(&self) -> u8 {
        self.message_type
    }

    /// Known message type, if any.
    pub fn message_type(&self) -> Option<MessageType> {
        MessageType::try_from(self.message_type).ok()
    }

    /// Anti-replay value.
    pub fn dejavu(&self) -> u32 {
        self.dejavu
    }
}

impl Wire for RequestResponseHeader {
    const SIZE: usize = HEADER_SIZE;

    fn encode(&self, out: &mut BytesMut) {
        out.put_slice(&self.size.to_le_bytes()[..3]);
        out.put_u8(self.message_type);
        out.put_u32_le(self.dejavu);
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        ensure_remaining(buf, HEADER_SIZE)?;
        let size = u32::from(buf.get_u8())
            | u32::from(buf.get_u8()) << 8
            | u32::from(buf.get_u8()) << 16;
        let message_type = buf.get_u8();
        let dejavu = buf.get_u32_le();
        Ok(Self {
            size,
            message_type,
            dejavu,
        })
    }
}

/// Random anti-replay value; zero is reserved for broadcasts.
pub fn random_dejavu() -> u32 {
    loop {
        let v: u32 = rand::random();
        if v != 0 {
            return v;
        }
    }
}

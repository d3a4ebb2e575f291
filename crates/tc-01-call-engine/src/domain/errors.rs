//! # Domain Errors
//!
//! Runtime failures of a call. Programmer errors (payload size that
//! disagrees with the call spec, wrong call kind, unknown operation name)
//! are not represented here; they panic at the call site.

use thiserror::Error;

/// Failure at the node session boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Peer closed the connection, or a scripted session ran dry.
    #[error("Connection closed by node")]
    ConnectionClosed,

    /// Read or write did not complete within the session timeout.
    #[error("Node session timed out")]
    Timeout,

    /// Frame header announced a size outside `8..=0xFFFFFF`.
    #[error("Invalid frame size: {0}")]
    InvalidFrameSize(u32),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TransportError {
    fn from(e: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match e.kind() {
            ErrorKind::TimedOut | ErrorKind::WouldBlock => Self::Timeout,
            ErrorKind::UnexpectedEof
            | ErrorKind::BrokenPipe
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted => Self::ConnectionClosed,
            _ => Self::Io(e.to_string()),
        }
    }
}

/// A reply arrived but is not the value that was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Body length differs from the fixed size of the expected type.
    #[error("Size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Encoded size of the expected type
        expected: usize,
        /// Bytes actually received
        actual: usize,
    },

    /// Reply carries a different message type.
    #[error("Unexpected message type: expected {expected}, got {actual}")]
    UnexpectedMessageType {
        /// Expected type tag
        expected: u8,
        /// Received type tag
        actual: u8,
    },

    /// Reply answers a different request.
    #[error("Dejavu mismatch: expected {expected:#010x}, got {actual:#010x}")]
    DejavuMismatch {
        /// Anti-replay value of the request
        expected: u32,
        /// Anti-replay value of the reply
        actual: u32,
    },

    /// Input ended before a field could be read.
    #[error("Truncated input: needed {needed} more bytes, {remaining} left")]
    Truncated {
        /// Bytes the field needs
        needed: usize,
        /// Bytes left in the input
        remaining: usize,
    },

    /// A field holds a value its type cannot represent.
    #[error("Invalid field: {0}")]
    InvalidField(String),
}

/// Failure of one contract call. Either way the caller has no usable result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// Send or receive failed.
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// Reply did not decode to the expected output.
    #[error("Decode failure: {0}")]
    Decode(#[from] DecodeError),
}

//! # Outbound Ports
//!
//! The node session the engine talks through.

use crate::domain::{CallError, DecodeError, MessageType, Packet, TransportError, Wire};
use std::collections::VecDeque;

/// Node session - outbound port.
///
/// Synchronous and single-flight: one send, then at most one receive per
/// operation. Timeouts are the session's business; a receive either returns
/// a packet or fails in finite time.
pub trait NodeSession {
    /// Node's current tick.
    fn current_tick(&mut self) -> Result<u32, CallError>;

    /// Send one complete frame.
    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError>;

    /// Receive one complete frame.
    fn receive(&mut self) -> Result<Packet, TransportError>;

    /// Receive one frame of type `expected` and decode its body as `T`.
    fn receive_typed<T: Wire>(&mut self, expected: MessageType) -> Result<T, CallError>
    where
        Self: Sized,
    {
        let packet = self.receive()?;
        if packet.header.type_tag() != expected as u8 {
            return Err(DecodeError::UnexpectedMessageType {
                expected: expected as u8,
                actual: packet.header.type_tag(),
            }
            .into());
        }
        Ok(T::from_bytes(&packet.body)?)
    }
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Scripted reply of a [`MockNodeSession`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockReply {
    /// Function reply carrying the dejavu of the last frame sent.
    Echo(Vec<u8>),
    /// Packet returned verbatim.
    Raw(Packet),
    /// Receive fails.
    Fail(TransportError),
}

/// Mock node session for testing.
#[derive(Clone, Debug, Default)]
pub struct MockNodeSession {
    /// Tick reported by `current_tick`.
    pub tick: u32,
    /// Every frame sent, in order.
    pub sent: Vec<Vec<u8>>,
    /// Replies handed out by `receive`, front first.
    pub replies: VecDeque<MockReply>,
    /// Should `send` fail?
    pub fail_send: bool,
    /// Should `current_tick` fail?
    pub fail_tick: bool,
}

impl MockNodeSession {
    /// Session reporting `tick`.
    pub fn with_tick(tick: u32) -> Self {
        Self {
            tick,
            ..Default::default()
        }
    }

    /// Queue a reply.
    pub fn reply(mut self, reply: MockReply) -> Self {
        self.replies.push_back(reply);
        self
    }

    /// Last frame sent.
    pub fn last_sent(&self) -> Option<&[u8]> {
        self.sent.last().map(Vec::as_slice)
    }

    fn last_dejavu(&self) -> u32 {
        self.last_sent()
            .filter(|frame| frame.len() >= 8)
            .map(|frame| u32::from_le_bytes([frame[4], frame[5], frame[6], frame[7]]))
            .unwrap_or(0)
    }
}

impl NodeSession for MockNodeSession {
    fn current_tick(&mut self) -> Result<u32, CallError> {
        if self.fail_tick {
            return Err(TransportError::Io("Mock failure".to_string()).into());
        }
        Ok(self.tick)
    }

    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        if self.fail_send {
            return Err(TransportError::Io("Mock failure".to_string()));
        }
        self.sent.push(frame.to_vec());
        Ok(())
    }

    fn receive(&mut self) -> Result<Packet, TransportError> {
        match self.replies.pop_front() {
            Some(MockReply::Echo(body)) => Ok(Packet::new(
                MessageType::RespondContractFunction,
                self.last_dejavu(),
                body,
            )),
            Some(MockReply::Raw(packet)) => Ok(packet),
            Some(MockReply::Fail(err)) => Err(err),
            None => Err(TransportError::ConnectionClosed),
        }
    }
}

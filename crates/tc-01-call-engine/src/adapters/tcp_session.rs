//! TCP Node Session Adapter
//!
//! Implements the `NodeSession` port over a blocking `std::net::TcpStream`.
//!
//! # Wire Protocol
//!
//! Frames are `header(8) ++ body`, where the header's 24-bit size field
//! covers the whole frame. Nodes push `ExchangePublicPeers` gossip right
//! after a connection opens; `receive` skips those.

use crate::domain::{
    CallError, CurrentTickInfo, MessageType, Packet, RequestResponseHeader, TransportError, Wire,
    HEADER_SIZE,
};
use crate::ports::outbound::NodeSession;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing::{debug, info, trace};

/// Socket timeouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionTimeouts {
    /// TCP connect timeout.
    pub connect: Duration,
    /// Per-read timeout.
    pub read: Duration,
    /// Per-write timeout.
    pub write: Duration,
}

impl Default for SessionTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            read: Duration::from_secs(5),
            write: Duration::from_secs(5),
        }
    }
}

/// Blocking TCP session to one node.
pub struct TcpNodeSession {
    stream: TcpStream,
    peer: SocketAddr,
}

impl TcpNodeSession {
    /// Connect to `addr` (e.g. "127.0.0.1:21841").
    ///
    /// # Errors
    ///
    /// Returns error if the address does not resolve or no resolved address
    /// accepts a connection within `timeouts.connect`.
    pub fn connect<A: ToSocketAddrs>(
        addr: A,
        timeouts: SessionTimeouts,
    ) -> Result<Self, TransportError> {
        let mut last_err = TransportError::Io("address resolved to nothing".to_string());
        for candidate in addr.to_socket_addrs()? {
            match TcpStream::connect_timeout(&candidate, timeouts.connect) {
                Ok(stream) => {
                    info!("[tc-01] connected to node {}", candidate);
                    return Self::from_stream(stream, timeouts);
                }
                Err(e) => {
                    debug!("[tc-01] connect to {} failed: {}", candidate, e);
                    last_err = e.into();
                }
            }
        }
        Err(last_err)
    }

    /// Wrap an already connected stream.
    pub fn from_stream(stream: TcpStream, timeouts: SessionTimeouts) -> Result<Self, TransportError> {
        stream.set_read_timeout(Some(timeouts.read))?;
        stream.set_write_timeout(Some(timeouts.write))?;
        stream.set_nodelay(true)?;
        let peer = stream.peer_addr()?;
        Ok(Self { stream, peer })
    }

    /// Address of the node.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    fn read_frame(&mut self) -> Result<Packet, TransportError> {
        let mut head = [0u8; HEADER_SIZE];
        self.stream.read_exact(&mut head)?;
        let header = RequestResponseHeader::from_bytes(&head)
            .map_err(|e| TransportError::Io(e.to_string()))?;
        if header.size() < HEADER_SIZE {
            return Err(TransportError::InvalidFrameSize(header.size() as u32));
        }

        let mut body = vec![0u8; header.body_size()];
        self.stream.read_exact(&mut body)?;
        Ok(Packet { header, body })
    }
}

impl NodeSession for TcpNodeSession {
    fn current_tick(&mut self) -> Result<u32, CallError> {
        let request =
            RequestResponseHeader::with_random_dejavu(MessageType::RequestCurrentTickInfo, HEADER_SIZE);
        self.send(&request.to_bytes())?;
        let info: CurrentTickInfo = self.receive_typed(MessageType::RespondCurrentTickInfo)?;
        debug!("[tc-01] node {} at tick {} (epoch {})", self.peer, info.tick, info.epoch);
        Ok(info.tick)
    }

    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        self.stream.write_all(frame)?;
        self.stream.flush()?;
        trace!("[tc-01] sent {} bytes to {}", frame.len(), self.peer);
        Ok(())
    }

    fn receive(&mut self) -> Result<Packet, TransportError> {
        loop {
            let packet = self.read_frame()?;
            if packet.header.type_tag() == MessageType::ExchangePublicPeers as u8 {
                trace!("[tc-01] skipping peer gossip from {}", self.peer);
                continue;
            }
            trace!(
                "[tc-01] received type {} ({} bytes) from {}",
                packet.header.type_tag(),
                packet.header.size(),
                self.peer
            );
            return Ok(packet);
        }
    }
}

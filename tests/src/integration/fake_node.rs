//! # Loopback Fake Node
//!
//! Accepts one connection and speaks just enough of the frame protocol:
//! gossip on connect, tick replies, scripted function replies, silent
//! acceptance of broadcasts. Every frame received is recorded.

use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use tc_01_call_engine::{
    CurrentTickInfo, MessageType, Packet, RequestResponseHeader, Wire, HEADER_SIZE,
};

/// What the node answers to the next function request.
#[derive(Clone, Debug)]
pub enum FunctionReply {
    /// `RespondContractFunction` with this body and the request's dejavu.
    Output(Vec<u8>),
    /// `EndResponse`, as a node sends for an unknown function.
    End,
    /// A reply tagged with a different dejavu.
    StaleDejavu(Vec<u8>),
}

/// Handle to a running fake node.
pub struct FakeNode {
    addr: SocketAddr,
    handle: JoinHandle<Vec<Vec<u8>>>,
}

impl FakeNode {
    /// Bind on an ephemeral loopback port and serve one client.
    pub fn spawn(tick: u32, replies: Vec<FunctionReply>) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let handle = thread::spawn(move || match listener.accept() {
            Ok((conn, _)) => serve(conn, tick, replies.into()),
            Err(_) => Vec::new(),
        });
        Ok(Self { addr, handle })
    }

    /// Where to connect.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Wait for the client to hang up and return every frame received.
    pub fn finish(self) -> Vec<Vec<u8>> {
        self.handle.join().unwrap_or_default()
    }
}

fn serve(mut conn: TcpStream, tick: u32, mut replies: VecDeque<FunctionReply>) -> Vec<Vec<u8>> {
    let mut received = Vec::new();
    let gossip = Packet::new(MessageType::ExchangePublicPeers, 0, vec![0u8; 16]);
    if conn.write_all(&gossip.to_bytes()).is_err() {
        return received;
    }

    while let Some(frame) = read_frame(&mut conn) {
        let Ok(packet) = Packet::parse(&frame) else {
            break;
        };
        received.push(frame);
        let dejavu = packet.header.dejavu();
        let reply = match packet.header.message_type() {
            Some(MessageType::RequestCurrentTickInfo) => {
                let info = CurrentTickInfo {
                    tick,
                    epoch: 180,
                    ..CurrentTickInfo::default()
                };
                Some(Packet::new(MessageType::RespondCurrentTickInfo, dejavu, info.to_bytes()))
            }
            Some(MessageType::RequestContractFunction) => Some(match replies.pop_front() {
                Some(FunctionReply::Output(body)) => {
                    Packet::new(MessageType::RespondContractFunction, dejavu, body)
                }
                Some(FunctionReply::StaleDejavu(body)) => Packet::new(
                    MessageType::RespondContractFunction,
                    dejavu.wrapping_add(1).max(1),
                    body,
                ),
                Some(FunctionReply::End) | None => {
                    Packet::new(MessageType::EndResponse, dejavu, Vec::new())
                }
            }),
            _ => None,
        };
        if let Some(reply) = reply {
            if conn.write_all(&reply.to_bytes()).is_err() {
                break;
            }
        }
    }
    received
}

fn read_frame(conn: &mut TcpStream) -> Option<Vec<u8>> {
    let mut head = [0u8; HEADER_SIZE];
    conn.read_exact(&mut head).ok()?;
    let header = RequestResponseHeader::from_bytes(&head).ok()?;
    let mut frame = head.to_vec();
    let mut body = vec![0u8; header.body_size()];
    conn.read_exact(&mut body).ok()?;
    frame.extend(body);
    Some(frame)
}

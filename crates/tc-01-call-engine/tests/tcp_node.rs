//! End-to-end dispatch against a loopback node speaking the frame protocol.

use shared_crypto::{digest, verify, KeyMaterial};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tc_01_call_engine::{
    CallEngineService, CallError, ContractCallApi, ContractCallSpec, CurrentTickInfo,
    FunctionDescriptor, MessageType, Packet, RequestResponseHeader, SessionTimeouts,
    SignedEnvelope, TcpNodeSession, TransportError, Wire, HEADER_SIZE,
};

const NODE_TICK: u32 = 20_000_000;
const LIST_IN_MARKET: ContractCallSpec = ContractCallSpec::procedure("shop.list_in_market", 12, 6, 12);
const NFT_COUNT: ContractCallSpec = ContractCallSpec::function("shop.nft_count", 12, 1, 32);

// ===== TEST FIXTURES =====

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

/// Serves tick requests, records broadcasts, answers function 1 with a
/// count equal to the first byte of the queried key.
fn spawn_node(broadcasts: mpsc::Sender<SignedEnvelope>) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut conn, _) = listener.accept().unwrap();
        let gossip = Packet::new(MessageType::ExchangePublicPeers, 0, vec![0u8; 64]);
        conn.write_all(&gossip.to_bytes()).unwrap();

        while let Some(frame) = read_frame(&mut conn) {
            let packet = Packet::parse(&frame).unwrap();
            match packet.header.message_type() {
                Some(MessageType::RequestCurrentTickInfo) => {
                    let info = CurrentTickInfo {
                        tick: NODE_TICK,
                        epoch: 180,
                        ..Default::default()
                    };
                    let reply = Packet::new(
                        MessageType::RespondCurrentTickInfo,
                        packet.header.dejavu(),
                        info.to_bytes(),
                    );
                    conn.write_all(&reply.to_bytes()).unwrap();
                }
                Some(MessageType::BroadcastTransaction) => {
                    broadcasts.send(SignedEnvelope::parse(&frame).unwrap()).unwrap();
                }
                Some(MessageType::RequestContractFunction) => {
                    let mut body = packet.body.as_slice();
                    let descriptor = FunctionDescriptor::decode(&mut body).unwrap();
                    let reply = if descriptor.input_type == 1 {
                        let count = u32::from(body[0]);
                        Packet::new(
                            MessageType::RespondContractFunction,
                            packet.header.dejavu(),
                            count.to_bytes(),
                        )
                    } else {
                        Packet::new(MessageType::EndResponse, packet.header.dejavu(), vec![])
                    };
                    conn.write_all(&reply.to_bytes()).unwrap();
                }
                _ => {}
            }
        }
    });
    addr
}

fn connect(addr: std::net::SocketAddr) -> CallEngineService<TcpNodeSession> {
    let timeouts = SessionTimeouts {
        connect: Duration::from_secs(2),
        read: Duration::from_secs(2),
        write: Duration::from_secs(2),
    };
    CallEngineService::new(TcpNodeSession::connect(addr, timeouts).unwrap())
}

// ===== TESTS =====

#[test]
fn broadcast_reaches_node_signed() {
    let (tx, rx) = mpsc::channel();
    let mut engine = connect(spawn_node(tx));
    let keys = KeyMaterial::from_seed(&"n".repeat(55)).unwrap();

    let mut payload = 1000u64.to_bytes();
    payload.extend(42u32.to_bytes());
    let receipt = engine.invoke_raw(&LIST_IN_MARKET, &payload, 0, 5, &keys).unwrap();
    assert_eq!(receipt.tick, NODE_TICK + 5);

    let received = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(received.metadata().tick, NODE_TICK + 5);
    assert_eq!(received.payload(), payload.as_slice());
    assert_eq!(received.header().dejavu(), 0);

    let signed = digest(&received.signed_range());
    assert_eq!(signed, receipt.pre_signature_digest);
    assert!(verify(keys.public_key(), &signed, received.signature()).is_ok());
}

#[test]
fn query_roundtrip_over_tcp() {
    let (tx, _rx) = mpsc::channel();
    let mut engine = connect(spawn_node(tx));

    let mut key = [0u8; 32];
    key[0] = 9;
    let raw = engine.query_raw(&NFT_COUNT, &key, 4).unwrap();
    assert_eq!(u32::from_bytes(&raw).unwrap(), 9);
}

#[test]
fn end_response_is_decode_failure() {
    let (tx, _rx) = mpsc::channel();
    let mut engine = connect(spawn_node(tx));

    let spec = ContractCallSpec::function("shop.other", 12, 2, 0);
    let err = engine.query_raw(&spec, &[], 4).unwrap_err();
    assert!(matches!(err, CallError::Decode(_)));
}

#[test]
fn silent_node_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let holder = thread::spawn(move || {
        let (conn, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_millis(800));
        drop(conn);
    });

    let timeouts = SessionTimeouts {
        connect: Duration::from_secs(1),
        read: Duration::from_millis(200),
        write: Duration::from_millis(200),
    };
    let mut engine = CallEngineService::new(TcpNodeSession::connect(addr, timeouts).unwrap());
    let err = engine.query_raw(&NFT_COUNT, &[0u8; 32], 4).unwrap_err();
    assert_eq!(err, CallError::Transport(TransportError::Timeout));
    holder.join().unwrap();
}

//! # Contract Flows over TCP
//!
//! Same contract calls as `contract_flows`, dispatched through a real
//! `TcpNodeSession` to the loopback [`FakeNode`](super::fake_node::FakeNode).

#[cfg(test)]
mod tests {
    use crate::integration::fake_node::{FakeNode, FunctionReply};
    use shared_crypto::{verify, KeyMaterial};
    use tc_01_call_engine::{
        contract_public_key, CallEngineService, CallError, ContractCallApi, DecodeError,
        MessageType, Packet, PublicKey, SessionTimeouts, SignedEnvelope, TcpNodeSession, Wire,
    };
    use tc_02_contracts::{qbay, qvault, vottun_bridge, Describe, BRIDGE_ORDER_FEE};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const NODE_TICK: u32 = 21_500_000;

    fn connect(node: &FakeNode) -> CallEngineService<TcpNodeSession> {
        let session = TcpNodeSession::connect(node.addr(), SessionTimeouts::default()).unwrap();
        CallEngineService::new(session)
    }

    fn keys() -> KeyMaterial {
        KeyMaterial::from_seed(&"z".repeat(55)).unwrap()
    }

    fn frames_of(frames: &[Vec<u8>], message_type: MessageType) -> Vec<Packet> {
        frames
            .iter()
            .map(|f| Packet::parse(f).unwrap())
            .filter(|p| p.header.message_type() == Some(message_type))
            .collect()
    }

    // =============================================================================
    // BROADCASTS
    // =============================================================================

    #[test]
    fn test_bridge_order_reaches_node() {
        let node = FakeNode::spawn(NODE_TICK, Vec::new()).unwrap();
        let keys = keys();
        let mut service = connect(&node);

        let order = vottun_bridge::CreateOrder {
            eth_address: PublicKey([0xE7; 32]),
            amount: 50_000,
            from_qubic_to_ethereum: true,
        };
        let receipt = service.invoke(&order, BRIDGE_ORDER_FEE, 15, &keys).unwrap();
        assert_eq!(receipt.tick, NODE_TICK + 15);
        drop(service);

        let frames = node.finish();
        let broadcasts: Vec<_> = frames
            .iter()
            .filter(|f| f[3] == MessageType::BroadcastTransaction as u8)
            .collect();
        assert_eq!(broadcasts.len(), 1);
        assert_eq!(&broadcasts[0][4..8], &[0, 0, 0, 0]);

        let envelope = SignedEnvelope::parse(broadcasts[0]).unwrap();
        let meta = envelope.metadata();
        assert_eq!(meta.amount, 1_000);
        assert_eq!(meta.tick, NODE_TICK + 15);
        assert_eq!(meta.input_type, 1);
        assert_eq!(meta.input_size, 41);
        assert_eq!(
            meta.destination_public_key,
            contract_public_key(vottun_bridge::CONTRACT_INDEX)
        );
        assert_eq!(envelope.payload(), order.to_bytes().as_slice());
        assert!(verify(keys.public_key(), &receipt.pre_signature_digest, envelope.signature()).is_ok());
    }

    #[test]
    fn test_tick_request_precedes_broadcast() {
        let node = FakeNode::spawn(NODE_TICK, Vec::new()).unwrap();
        let mut service = connect(&node);

        assert_eq!(service.current_tick().unwrap(), NODE_TICK);
        service
            .invoke(&qbay::CancelSale { nft_id: 3 }, 0, 1, &keys())
            .unwrap();
        drop(service);

        let kinds: Vec<u8> = node.finish().iter().map(|f| f[3]).collect();
        assert_eq!(
            kinds,
            vec![
                MessageType::RequestCurrentTickInfo as u8,
                MessageType::RequestCurrentTickInfo as u8,
                MessageType::BroadcastTransaction as u8,
            ]
        );
    }

    // =============================================================================
    // QUERIES
    // =============================================================================

    #[test]
    fn test_marketplace_query() {
        let mut body = vec![0u8; qbay::MarketplaceInfo::SIZE];
        body[0..8].copy_from_slice(&1_234u64.to_le_bytes());
        let node = FakeNode::spawn(NODE_TICK, vec![FunctionReply::Output(body)]).unwrap();
        let mut service = connect(&node);

        let info = service.query(&qbay::GetInfoOfMarketplace::default()).unwrap();
        assert_eq!(info.price_of_cfb, 1_234);
        assert!(!info.describe().is_empty());
        drop(service);

        let queries = frames_of(&node.finish(), MessageType::RequestContractFunction);
        assert_eq!(queries.len(), 1);
        assert_ne!(queries[0].header.dejavu(), 0);
        assert_eq!(&queries[0].body[0..4], &12u32.to_le_bytes());
        assert_eq!(&queries[0].body[4..6], &3u16.to_le_bytes());
    }

    #[test]
    fn test_consecutive_queries_share_session() {
        let node = FakeNode::spawn(
            NODE_TICK,
            vec![
                FunctionReply::Output(7u64.to_bytes()),
                FunctionReply::Output(vec![0u8; qvault::VaultData::SIZE]),
            ],
        )
        .unwrap();
        let mut service = connect(&node);

        assert_eq!(service.query(&vottun_bridge::GetTotalLockedTokens).unwrap(), 7);
        assert!(service.query(&qvault::GetData::default()).is_ok());
        drop(service);

        let queries = frames_of(&node.finish(), MessageType::RequestContractFunction);
        assert_eq!(queries.len(), 2);
        assert_ne!(queries[0].header.dejavu(), queries[1].header.dejavu());
    }

    #[test]
    fn test_end_response_is_decode_error() {
        let node = FakeNode::spawn(NODE_TICK, vec![FunctionReply::End]).unwrap();
        let mut service = connect(&node);

        let err = service
            .query(&qbay::GetNumberOfNftForUser {
                user: PublicKey::ZERO,
            })
            .unwrap_err();
        assert_eq!(
            err,
            CallError::Decode(DecodeError::UnexpectedMessageType {
                expected: MessageType::RespondContractFunction as u8,
                actual: MessageType::EndResponse as u8,
            })
        );
    }

    #[test]
    fn test_stale_reply_is_decode_error() {
        let node =
            FakeNode::spawn(NODE_TICK, vec![FunctionReply::StaleDejavu(5u32.to_bytes())]).unwrap();
        let mut service = connect(&node);

        let err = service
            .query(&qbay::GetNumberOfNftForUser {
                user: PublicKey::ZERO,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            CallError::Decode(DecodeError::DejavuMismatch { .. })
        ));
    }
}

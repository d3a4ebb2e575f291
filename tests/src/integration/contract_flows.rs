//! # Contract Flows over the Mock Session
//!
//! Typed payloads from every contract module, broadcast and queried through
//! `CallEngineService<MockNodeSession>`, checked byte-for-byte on the wire.

#[cfg(test)]
mod tests {
    use shared_crypto::{digest, verify, KeyMaterial};
    use tc_01_call_engine::{
        contract_public_key, pre_signature_digest, CallEngineService, CallError,
        ContractCallApi, DecodeError, FunctionInput, MessageType, MockNodeSession, MockReply, Packet,
        ProcedureInput, PublicKey, SignedEnvelope, Wire,
    };
    use tc_02_contracts::{
        qbay, qip, qvault, vottun_bridge, Asset, AssetName, Describe, PaymentMethod, Uri64,
        QBAY_MINT_FEE, QBAY_TRANSFER_RIGHTS_FEE, QIP_TRANSFER_RIGHTS_FEE, REGISTRY,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const SEED: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    fn keys() -> KeyMaterial {
        KeyMaterial::from_seed(SEED).unwrap()
    }

    fn service(tick: u32) -> CallEngineService<MockNodeSession> {
        CallEngineService::new(MockNodeSession::with_tick(tick))
    }

    fn sent_envelope(service: &CallEngineService<MockNodeSession>) -> SignedEnvelope {
        SignedEnvelope::parse(service.session().last_sent().unwrap()).unwrap()
    }

    fn broadcast<P: ProcedureInput>(payload: &P, amount: u64) -> SignedEnvelope {
        let mut service = service(1_000);
        service.invoke(payload, amount, 20, &keys()).unwrap();
        sent_envelope(&service)
    }

    // =============================================================================
    // BROADCASTS
    // =============================================================================

    #[test]
    fn test_list_in_market_end_to_end() {
        let keys = keys();
        let mut service = service(20_000_000);
        let payload = qbay::ListInMarket {
            price: 5_000,
            nft_id: 31,
        };

        let receipt = service.invoke(&payload, 0, 10, &keys).unwrap();
        let envelope = sent_envelope(&service);
        let meta = envelope.metadata();

        assert_eq!(meta.source_public_key, PublicKey(*keys.public_key()));
        assert_eq!(meta.destination_public_key, contract_public_key(qbay::CONTRACT_INDEX));
        assert_eq!(meta.tick, 20_000_010);
        assert_eq!(meta.input_type, 6);
        assert_eq!(meta.input_size, 12);
        assert_eq!(envelope.payload(), payload.to_bytes().as_slice());

        let pre = pre_signature_digest(meta, envelope.payload());
        assert_eq!(pre, receipt.pre_signature_digest);
        verify(keys.public_key(), &pre, envelope.signature()).unwrap();
        assert_eq!(receipt.tick, 20_000_010);
    }

    #[test]
    fn test_fixed_fees_travel_as_amount() {
        let mint = qbay::Mint {
            royalty: 5,
            collection_id: 1,
            uri: Uri64::new("ipfs://mint"),
            type_of_mint: 1,
        };
        assert_eq!(broadcast(&mint, QBAY_MINT_FEE).metadata().amount, 5_000_000);

        let rights = qip::TransferShareManagementRights {
            asset: Asset {
                issuer: PublicKey([7; 32]),
                asset_name: AssetName::parse("QIPX").unwrap(),
            },
            number_of_shares: 10,
            new_managing_contract_index: 12,
        };
        let envelope = broadcast(&rights, QIP_TRANSFER_RIGHTS_FEE);
        assert_eq!(envelope.metadata().amount, 100);
        assert_eq!(envelope.metadata().input_size, 52);
        assert_eq!(envelope.metadata().input_type, 3);
        assert_eq!(
            envelope.metadata().destination_public_key,
            contract_public_key(qip::CONTRACT_INDEX)
        );
    }

    #[test]
    fn test_qbay_transfer_rights_layout_matches_qip() {
        let asset = Asset {
            issuer: PublicKey([7; 32]),
            asset_name: AssetName::parse("CFB").unwrap(),
        };
        let qbay_payload = qbay::TransferShareManagementRights {
            asset,
            number_of_shares: 1,
            new_managing_contract_index: 11,
        };
        let qip_payload = qip::TransferShareManagementRights {
            asset,
            number_of_shares: 1,
            new_managing_contract_index: 11,
        };
        assert_eq!(qbay_payload.to_bytes(), qip_payload.to_bytes());
        let envelope = broadcast(&qbay_payload, QBAY_TRANSFER_RIGHTS_FEE);
        assert_eq!(envelope.metadata().input_type, 16);
    }

    #[test]
    fn test_bid_amount_by_payment_method() {
        for (payment, expected) in [(PaymentMethod::Qubic, 2_500), (PaymentMethod::Cfb, 0)] {
            let bid = qbay::BidOnTraditionalAuction {
                price: 2_500,
                nft_id: 4,
                payment_method: payment,
            };
            let envelope = broadcast(&bid, bid.invocation_amount());
            assert_eq!(envelope.metadata().amount, expected);
            assert_eq!(envelope.payload()[12], u8::from(payment == PaymentMethod::Cfb));
        }
    }

    #[test]
    fn test_vault_procedures_carry_no_amount() {
        let envelope = broadcast(
            &qvault::SubmitFees {
                qcap_holder_permille: 500,
                reinvesting_permille: 300,
                dev_permille: 20,
            },
            0,
        );
        assert_eq!(envelope.metadata().amount, 0);
        assert_eq!(envelope.metadata().input_type, 3);
        assert_eq!(
            envelope.metadata().destination_public_key,
            contract_public_key(qvault::CONTRACT_INDEX)
        );
    }

    #[test]
    fn test_every_procedure_broadcasts_with_registry_size() {
        let keys = keys();
        for spec in REGISTRY.iter().filter(|s| s.is_procedure()) {
            let mut service = service(77);
            let payload = vec![0u8; spec.payload_len()];
            let receipt = service.invoke_raw(spec, &payload, 0, 1, &keys).unwrap();
            let envelope = sent_envelope(&service);
            assert_eq!(envelope.metadata().input_type, spec.operation_id, "{}", spec.name);
            assert_eq!(envelope.len(), 8 + 80 + spec.payload_len() + 64, "{}", spec.name);
            assert_eq!(receipt.tick, 78);
        }
    }

    #[test]
    fn test_identical_calls_differ_only_by_tick() {
        let payload = qbay::CancelSale { nft_id: 9 };
        let keys = keys();

        let mut first = service(100);
        let a = first.invoke(&payload, 0, 5, &keys).unwrap();
        let mut second = service(101);
        let b = second.invoke(&payload, 0, 5, &keys).unwrap();

        assert_ne!(a.tx_hash, b.tx_hash);
        assert_eq!(a.payload, b.payload);
    }

    // =============================================================================
    // QUERIES
    // =============================================================================

    #[test]
    fn test_nft_count_query() {
        let mut service = CallEngineService::new(
            MockNodeSession::default().reply(MockReply::Echo(3u32.to_bytes())),
        );
        let count = service
            .query(&qbay::GetNumberOfNftForUser {
                user: PublicKey([4; 32]),
            })
            .unwrap();
        assert_eq!(count, 3);

        let sent = service.session().last_sent().unwrap();
        assert_eq!(sent.len(), 8 + 8 + 32);
        assert_eq!(sent[3], 42);
        assert_eq!(&sent[16..], &[4u8; 32]);
    }

    #[test]
    fn test_ico_info_query_feeds_payment_estimate() {
        let mut reply = vec![0u8; qip::IcoInfo::SIZE];
        // prices start after creator, issuer, ten addresses and the asset name
        reply[392..400].copy_from_slice(&100u64.to_le_bytes());
        reply[400..408].copy_from_slice(&200u64.to_le_bytes());
        let mut service =
            CallEngineService::new(MockNodeSession::default().reply(MockReply::Echo(reply)));

        let info = service.query(&qip::GetIcoInfo { index_of_ico: 0 }).unwrap();
        assert_eq!(qip::estimate_payment(&info, 5, 1).unwrap(), 500);
        assert_eq!(qip::estimate_payment(&info, 5, 2).unwrap(), 1_000);
    }

    #[test]
    fn test_locked_tokens_query_sends_empty_input() {
        let mut service = CallEngineService::new(
            MockNodeSession::default().reply(MockReply::Echo(9_000u64.to_bytes())),
        );
        let locked = service.query(&vottun_bridge::GetTotalLockedTokens).unwrap();
        assert_eq!(locked, 9_000);
        assert_eq!(service.session().last_sent().unwrap().len(), 16);
    }

    #[test]
    fn test_admin_id_describes_as_identity() {
        let admin = PublicKey(digest(b"admin"));
        let mut service = CallEngineService::new(
            MockNodeSession::default().reply(MockReply::Echo(admin.to_bytes())),
        );
        let got = service.query(&vottun_bridge::GetAdminId { id_input: 0 }).unwrap();
        assert_eq!(got, admin);
        assert_eq!(got.describe().len(), 60);
    }

    #[test]
    fn test_short_reply_is_size_mismatch() {
        let mut service = CallEngineService::new(
            MockNodeSession::default().reply(MockReply::Echo(vec![0u8; 48])),
        );
        let err = service.query(&qbay::GetInfoOfMarketplace::default()).unwrap_err();
        assert_eq!(
            err,
            CallError::Decode(DecodeError::SizeMismatch {
                expected: 49,
                actual: 48
            })
        );
    }

    #[test]
    fn test_reply_from_other_request_rejected() {
        // query dejavus are never zero
        let stale = Packet::new(
            MessageType::RespondContractFunction,
            0,
            vec![0u8; qbay::MarketplaceInfo::SIZE],
        );
        let mut service =
            CallEngineService::new(MockNodeSession::default().reply(MockReply::Raw(stale)));
        let err = service.query(&qbay::GetInfoOfMarketplace::default()).unwrap_err();
        assert!(matches!(
            err,
            CallError::Decode(DecodeError::DejavuMismatch { .. })
        ));
    }

    #[test]
    fn test_every_function_queries_with_registry_size() {
        for spec in REGISTRY.iter().filter(|s| !s.is_procedure()) {
            let mut service = CallEngineService::new(
                MockNodeSession::default().reply(MockReply::Echo(vec![1, 2, 3])),
            );
            let input = vec![0u8; spec.payload_len()];
            let out = service.query_raw(spec, &input, 3).unwrap();
            assert_eq!(out, vec![1, 2, 3], "{}", spec.name);
            let sent = service.session().last_sent().unwrap();
            assert_eq!(sent.len(), 16 + spec.payload_len(), "{}", spec.name);
            assert_eq!(
                u16::from_le_bytes([sent[12], sent[13]]),
                spec.operation_id,
                "{}",
                spec.name
            );
        }
    }

    #[test]
    fn test_typed_specs_are_registered() {
        assert_eq!(
            REGISTRY.lookup("qbay.list_in_market"),
            &<qbay::ListInMarket as ProcedureInput>::SPEC
        );
        assert_eq!(
            REGISTRY.lookup("qvault.get_data"),
            &<qvault::GetData as FunctionInput>::SPEC
        );
    }
}

//! End-to-end attestation: a lifecycle event born in the registry travels
//! through the dispatch client, off the mock source ledger, and into the
//! receiver's verification pipeline.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shared_types::{unix_now, InMemoryBlobStore, LifecycleAction, U256};
    use st_dispatch::{
        parse_gateway_call, Destination, DispatchApi, DispatchConfig, DispatchRequest,
        MockLedgerClient, StaticFeeOracle,
    };
    use st_registry::RegistryService;
    use st_verifier::{
        AttestationQueryApi, InboundEnvelope, VerificationApi, VerificationError, VerifierConfig,
        VerifierService,
    };

    const SOURCE_TX: [u8; 32] = [0x11; 32];

    fn funded_ledger(config: &DispatchConfig) -> Arc<MockLedgerClient> {
        let ledger = Arc::new(MockLedgerClient::new());
        ledger.set_balance(config.payer, U256::from(10u64).pow(U256::from(20u64)));
        ledger
    }

    /// Deliver the payload the dispatch client actually put on the wire to
    /// a verifier configured to trust this relay.
    fn deliver(
        verifier: &VerifierService,
        ledger: &MockLedgerClient,
        submission_index: usize,
    ) -> Result<st_verifier::GatewayEvent, VerificationError> {
        let submitted = ledger.submitted();
        let tx = submitted
            .get(submission_index)
            .unwrap_or_else(|| panic!("no submission at index {submission_index}"));
        let (_, payload) = parse_gateway_call(&tx.data).expect("gateway frame parses");

        let config = VerifierConfig::for_testing();
        let envelope = InboundEnvelope {
            caller: config.gateway,
            origin_domain: config.origin_domain,
            origin_sender: config.origin_sender,
            payload: payload.to_vec(),
        };
        verifier.process(envelope, unix_now())
    }

    #[tokio::test]
    async fn registered_pig_is_attested_on_the_receiver() {
        crate::integration::init_test_logging();
        let registry = RegistryService::new(InMemoryBlobStore::new());
        let event = registry
            .register_pig("PIG001", "Duroc", "farm-a", 1_700_000_000)
            .await
            .expect("registration");

        let config = DispatchConfig::for_testing();
        let ledger = funded_ledger(&config);
        let client = DispatchClientFixture::build(Arc::clone(&ledger), config);

        let destination = Destination {
            domain: 2,
            recipient: [0x77; 32],
        };
        let receipt = client
            .dispatch(
                SOURCE_TX,
                DispatchRequest {
                    action: event.action.clone(),
                    record_id: event.record_id,
                    data_hash: event.data_hash,
                    content_cid: event.content_cid.to_string(),
                },
                &destination,
            )
            .await
            .expect("dispatch succeeds");

        let verifier =
            VerifierService::new(VerifierConfig::for_testing()).expect("verifier config");
        let committed = deliver(&verifier, &ledger, 0).expect("message verifies");

        assert_eq!(committed.record_id, event.record_id);
        assert_eq!(committed.nonce, receipt.message_nonce);
        assert_eq!(committed.data_hash, event.data_hash);
        assert_eq!(committed.source_tx_hash, SOURCE_TX);

        let record = verifier
            .get_record(event.record_id)
            .expect("record attested");
        assert_eq!(record.action, LifecycleAction::PigRegistered);
        assert_eq!(record.data_hash, event.data_hash);
        assert!(verifier.is_verified(event.record_id));
        assert_eq!(verifier.verified_count(), 1);
    }

    #[tokio::test]
    async fn replayed_delivery_is_rejected_exactly_once_committed() {
        let registry = RegistryService::new(InMemoryBlobStore::new());
        let event = registry
            .register_pig("PIG002", "Landrace", "farm-b", 1_700_000_000)
            .await
            .expect("registration");

        let config = DispatchConfig::for_testing();
        let ledger = funded_ledger(&config);
        let client = DispatchClientFixture::build(Arc::clone(&ledger), config);

        let destination = Destination {
            domain: 2,
            recipient: [0x77; 32],
        };
        client
            .dispatch(
                SOURCE_TX,
                DispatchRequest {
                    action: event.action.clone(),
                    record_id: event.record_id,
                    data_hash: event.data_hash,
                    content_cid: event.content_cid.to_string(),
                },
                &destination,
            )
            .await
            .expect("dispatch succeeds");

        let verifier =
            VerifierService::new(VerifierConfig::for_testing()).expect("verifier config");
        deliver(&verifier, &ledger, 0).expect("first delivery commits");

        let err = deliver(&verifier, &ledger, 0).expect_err("replay must be rejected");
        assert!(matches!(err, VerificationError::DuplicateMessage { .. }));

        // The attestation itself is untouched by the replay.
        assert_eq!(verifier.verified_count(), 1);
    }

    #[tokio::test]
    async fn tampered_payload_cannot_reuse_a_consumed_nonce() {
        let registry = RegistryService::new(InMemoryBlobStore::new());
        let event = registry
            .register_pig("PIG003", "Duroc", "farm-a", 1_700_000_000)
            .await
            .expect("registration");

        let config = DispatchConfig::for_testing();
        let ledger = funded_ledger(&config);
        let client = DispatchClientFixture::build(Arc::clone(&ledger), config);

        client
            .dispatch(
                SOURCE_TX,
                DispatchRequest {
                    action: event.action.clone(),
                    record_id: event.record_id,
                    data_hash: event.data_hash,
                    content_cid: event.content_cid.to_string(),
                },
                &Destination {
                    domain: 2,
                    recipient: [0x77; 32],
                },
            )
            .await
            .expect("dispatch succeeds");

        let verifier =
            VerifierService::new(VerifierConfig::for_testing()).expect("verifier config");
        deliver(&verifier, &ledger, 0).expect("honest delivery commits");

        // Flip one byte inside the data hash. The message hash changes, so
        // hash dedup passes; the nonce replay check has to catch it.
        let submitted = ledger.submitted();
        let (_, payload) = parse_gateway_call(&submitted[0].data).expect("frame parses");
        let mut tampered = payload.to_vec();
        let hash_offset = 32 + 4 + event.action.as_tag().len() + 8;
        tampered[hash_offset] ^= 0xFF;

        let config = VerifierConfig::for_testing();
        let err = verifier
            .process(
                InboundEnvelope {
                    caller: config.gateway,
                    origin_domain: config.origin_domain,
                    origin_sender: config.origin_sender,
                    payload: tampered,
                },
                unix_now(),
            )
            .expect_err("tampered replay must be rejected");
        assert!(matches!(err, VerificationError::DuplicateNonce { .. }));
    }

    #[tokio::test]
    async fn untrusted_caller_is_rejected_before_decoding() {
        let verifier =
            VerifierService::new(VerifierConfig::for_testing()).expect("verifier config");
        let config = VerifierConfig::for_testing();

        let err = verifier
            .process(
                InboundEnvelope {
                    caller: [0x01; 20],
                    origin_domain: config.origin_domain,
                    origin_sender: config.origin_sender,
                    // Garbage payload; caller check must fire first.
                    payload: vec![0xDE, 0xAD],
                },
                unix_now(),
            )
            .expect_err("unknown caller must be rejected");
        assert!(matches!(err, VerificationError::UnauthorizedCaller { .. }));
    }

    #[tokio::test]
    async fn full_lifecycle_attests_each_event_under_one_record() {
        let registry = RegistryService::new(InMemoryBlobStore::new());
        let registered = registry
            .register_pig("PIG004", "Duroc", "farm-a", 1_700_000_000)
            .await
            .expect("registration");
        let id = registered.record_id;
        let vaccinated = registry
            .add_vaccination(id, "CSF-vax", 1_700_100_000)
            .await
            .expect("vaccination");
        let sold = registry
            .record_sale(id, "buyer-x", 150_000, 1_700_200_000)
            .await
            .expect("sale");

        let config = DispatchConfig::for_testing();
        let ledger = funded_ledger(&config);
        let client = DispatchClientFixture::build(Arc::clone(&ledger), config);
        let destination = Destination {
            domain: 2,
            recipient: [0x77; 32],
        };

        for event in [&registered, &vaccinated, &sold] {
            client
                .dispatch(
                    SOURCE_TX,
                    DispatchRequest {
                        action: event.action.clone(),
                        record_id: event.record_id,
                        data_hash: event.data_hash,
                        content_cid: event.content_cid.to_string(),
                    },
                    &destination,
                )
                .await
                .expect("dispatch succeeds");
        }

        let verifier =
            VerifierService::new(VerifierConfig::for_testing()).expect("verifier config");
        for i in 0..3 {
            deliver(&verifier, &ledger, i).expect("delivery commits");
        }

        // Last write wins; the index still holds one entry for the record.
        let record = verifier.get_record(id).expect("record attested");
        assert_eq!(record.action, LifecycleAction::SaleRecorded);
        assert_eq!(record.data_hash, sold.data_hash);
        assert_eq!(verifier.verified_count(), 1);
        assert_eq!(
            verifier.list_verified(0, 10).expect("in-range page"),
            vec![id]
        );
    }

    /// Builder shorthand so every test constructs the same client shape.
    struct DispatchClientFixture;

    impl DispatchClientFixture {
        fn build(
            ledger: Arc<MockLedgerClient>,
            config: DispatchConfig,
        ) -> st_dispatch::DispatchClient<MockLedgerClient, StaticFeeOracle> {
            st_dispatch::DispatchClient::new(
                ledger,
                StaticFeeOracle::new(U256::from(1_000_000u64)),
                config,
            )
            .expect("valid dispatch config")
        }
    }
}

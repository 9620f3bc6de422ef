//! Off-ledger content proofs: the bundle a registry operation publishes
//! must be provable against the root that travelled cross-chain, and
//! nothing else.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shared_types::{unix_now, ContentId, InMemoryBlobStore, U256};
    use st_dispatch::{
        parse_gateway_call, Destination, DispatchApi, DispatchClient, DispatchConfig,
        DispatchRequest, MockLedgerClient, StaticFeeOracle,
    };
    use st_integrity::{IntegrityError, IntegrityService};
    use st_registry::RegistryService;

    #[tokio::test]
    async fn published_bundle_proves_against_the_relayed_root() {
        crate::integration::init_test_logging();
        let blobs = InMemoryBlobStore::new();
        let registry = RegistryService::new(blobs.clone());
        let event = registry
            .register_pig("PIG001", "Duroc", "farm-a", 1_700_000_000)
            .await
            .expect("registration");

        // Relay the event and recover the message exactly as a consumer
        // on the receiving side would see it.
        let config = DispatchConfig::for_testing();
        let ledger = Arc::new(MockLedgerClient::new());
        ledger.set_balance(config.payer, U256::from(u64::MAX));
        let client = DispatchClient::new(
            Arc::clone(&ledger),
            StaticFeeOracle::new(U256::from(1_000u64)),
            config,
        )
        .expect("valid dispatch config");
        client
            .dispatch(
                [0x11; 32],
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

        let submitted = ledger.submitted();
        let (_, payload) = parse_gateway_call(&submitted[0].data).expect("frame parses");
        let message = st_codec::decode(payload).expect("payload decodes");

        // The consumer resolves the CID from the message, not the registry.
        let integrity = IntegrityService::new(blobs);
        let verified = integrity
            .verify_content(
                message.record_id,
                &ContentId(message.content_cid.clone()),
                &message.data_hash,
                unix_now(),
            )
            .await
            .expect("verification runs");
        assert!(verified);
    }

    #[tokio::test]
    async fn bundle_does_not_prove_against_another_events_root() {
        let blobs = InMemoryBlobStore::new();
        let registry = RegistryService::new(blobs.clone());
        let registered = registry
            .register_pig("PIG001", "Duroc", "farm-a", 1_700_000_000)
            .await
            .expect("registration");
        let vaccinated = registry
            .add_vaccination(registered.record_id, "CSF-vax", 1_700_100_000)
            .await
            .expect("vaccination");

        let integrity = IntegrityService::new(blobs);
        let verified = integrity
            .verify_content(
                registered.record_id,
                &registered.content_cid,
                &vaccinated.data_hash,
                unix_now(),
            )
            .await
            .expect("verification runs");
        assert!(!verified);
    }

    #[tokio::test]
    async fn unresolvable_cid_is_an_error_not_a_negative() {
        let integrity = IntegrityService::new(InMemoryBlobStore::new());
        let err = integrity
            .verify_content(
                1,
                &ContentId("bafy-nothing-here".to_string()),
                &[0x42; 32],
                unix_now(),
            )
            .await
            .expect_err("missing blob must error");
        assert!(matches!(err, IntegrityError::Blob(_)));
    }
}

//! Batch relay against the mock ledger: sequential submission, bounded
//! retry, and partial failure that never aborts the batch.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use shared_types::{LifecycleAction, U256};
    use st_dispatch::{
        BatchDispatcher, BatchItem, DispatchClient, DispatchConfig, DispatchError,
        MockLedgerClient, StaticFeeOracle,
    };

    const SOURCE_TX: [u8; 32] = [0x22; 32];
    const DESTINATION: st_dispatch::Destination = st_dispatch::Destination {
        domain: 2,
        recipient: [0x77; 32],
    };

    fn items(n: u64) -> Vec<BatchItem> {
        (1..=n)
            .map(|i| BatchItem {
                record_id: i,
                data_hash: [i as u8; 32],
                content_cid: format!("bafy{i:04}"),
            })
            .collect()
    }

    fn batch_over(
        ledger: Arc<MockLedgerClient>,
        config: DispatchConfig,
    ) -> BatchDispatcher<DispatchClient<MockLedgerClient, StaticFeeOracle>> {
        let delay = Duration::from_millis(config.inter_item_delay_ms);
        let client = DispatchClient::new(ledger, StaticFeeOracle::new(U256::from(1_000u64)), config)
            .expect("valid dispatch config");
        BatchDispatcher::new(client, delay)
    }

    #[tokio::test]
    async fn all_items_relay_in_input_order() {
        crate::integration::init_test_logging();
        let config = DispatchConfig::for_testing();
        let ledger = Arc::new(MockLedgerClient::new());
        ledger.set_balance(config.payer, U256::from(u64::MAX));
        let batch = batch_over(Arc::clone(&ledger), config);

        let outcome = batch
            .dispatch_batch(
                SOURCE_TX,
                LifecycleAction::VaccineAdded,
                items(3),
                &DESTINATION,
            )
            .await;

        assert!(outcome.all_succeeded());
        assert_eq!(outcome.items.len(), 3);
        let submitted = ledger.submitted();
        assert_eq!(submitted.len(), 3);
        // Sequences advance monotonically, one per accepted item.
        assert_eq!(
            submitted.iter().map(|tx| tx.sequence).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[tokio::test]
    async fn transient_submit_failure_is_retried_within_the_item() {
        let config = DispatchConfig::for_testing();
        let ledger = Arc::new(MockLedgerClient::new());
        ledger.set_balance(config.payer, U256::from(u64::MAX));
        // One injected failure; the item's retry budget absorbs it.
        ledger.fail_next_submits(1);
        let batch = batch_over(Arc::clone(&ledger), config);

        let outcome = batch
            .dispatch_batch(
                SOURCE_TX,
                LifecycleAction::PigRegistered,
                items(1),
                &DESTINATION,
            )
            .await;

        assert!(outcome.all_succeeded());
        assert_eq!(ledger.submitted().len(), 1);
    }

    #[tokio::test]
    async fn exhausted_retries_fail_one_item_and_spare_the_rest() {
        let config = DispatchConfig::for_testing();
        let attempts = config.max_submit_attempts;
        let ledger = Arc::new(MockLedgerClient::new());
        ledger.set_balance(config.payer, U256::from(u64::MAX));
        // Enough injected failures to exhaust the first item's retries.
        ledger.fail_next_submits(attempts);
        let batch = batch_over(Arc::clone(&ledger), config);

        let outcome = batch
            .dispatch_batch(
                SOURCE_TX,
                LifecycleAction::SaleRecorded,
                items(3),
                &DESTINATION,
            )
            .await;

        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.failed_record_ids(), vec![1]);
        assert!(matches!(
            outcome.items[0].result,
            Err(DispatchError::Network(_))
        ));
        assert!(outcome.items[1].result.is_ok());
        assert!(outcome.items[2].result.is_ok());
        assert_eq!(ledger.submitted().len(), 2);
    }

    #[tokio::test]
    async fn unfunded_payer_fails_every_item_without_submitting() {
        let config = DispatchConfig::for_testing();
        let ledger = Arc::new(MockLedgerClient::new());
        // No balance set; the preflight check rejects each item.
        let batch = batch_over(Arc::clone(&ledger), config);

        let outcome = batch
            .dispatch_batch(
                SOURCE_TX,
                LifecycleAction::QrGenerated,
                items(2),
                &DESTINATION,
            )
            .await;

        assert_eq!(outcome.failed, 2);
        for item in &outcome.items {
            assert!(matches!(
                item.result,
                Err(DispatchError::InsufficientFunds { .. })
            ));
        }
        assert!(ledger.submitted().is_empty());
    }
}

//! # Dispatch Entities

use super::errors::DispatchError;
use serde::{Deserialize, Serialize};
use shared_types::{DomainId, Hash, LifecycleAction, RecordId, U256};
use uuid::Uuid;

/// Where a message is being relayed to: the destination domain and the
/// receiving contract on that ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Destination ledger domain id.
    pub domain: DomainId,
    /// Receiving contract identifier on the destination ledger.
    pub recipient: Hash,
}

/// One lifecycle event to relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Lifecycle action being attested.
    pub action: LifecycleAction,
    /// Record the event belongs to.
    pub record_id: RecordId,
    /// Merkle root of the record's salted fields.
    pub data_hash: Hash,
    /// Content address of the published salted bundle.
    pub content_cid: String,
}

/// Outcome of a successful dispatch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DispatchReceipt {
    /// Correlation id for tracing this dispatch across logs.
    pub correlation_id: Uuid,
    /// Message nonce carried in the relayed payload.
    pub message_nonce: U256,
    /// Source-ledger transaction that carried the message.
    pub tx_hash: Hash,
    /// Block the transaction was included in.
    pub block_height: u64,
    /// Relay fee actually paid.
    pub fee_paid: U256,
    /// Gas limit submitted with the transaction.
    pub gas_limit: u64,
}

/// One item in a batch dispatch. The action and destination are shared
/// across the batch; each item carries its own record data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItem {
    /// Record the event belongs to.
    pub record_id: RecordId,
    /// Merkle root of the record's salted fields.
    pub data_hash: Hash,
    /// Content address of the published salted bundle.
    pub content_cid: String,
}

/// Per-item result of a batch dispatch.
#[derive(Debug)]
pub struct BatchItemOutcome {
    /// Record the item belonged to.
    pub record_id: RecordId,
    /// Success or the classified failure.
    pub result: Result<DispatchReceipt, DispatchError>,
}

/// Aggregate result of a batch dispatch. Always covers every input item.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// One outcome per input item, in input order.
    pub items: Vec<BatchItemOutcome>,
    /// Number of failed items.
    pub failed: usize,
}

impl BatchOutcome {
    /// Whether every item succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Record ids of failed items, for targeted retry.
    pub fn failed_record_ids(&self) -> Vec<RecordId> {
        self.items
            .iter()
            .filter(|item| item.result.is_err())
            .map(|item| item.record_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_record_ids() {
        let outcome = BatchOutcome {
            items: vec![
                BatchItemOutcome {
                    record_id: 1,
                    result: Err(DispatchError::Reverted {
                        reason: "execution failed".to_string(),
                    }),
                },
                BatchItemOutcome {
                    record_id: 2,
                    result: Ok(DispatchReceipt {
                        correlation_id: Uuid::new_v4(),
                        message_nonce: U256::one(),
                        tx_hash: [0; 32],
                        block_height: 10,
                        fee_paid: U256::zero(),
                        gas_limit: 100_000,
                    }),
                },
            ],
            failed: 1,
        };
        assert!(!outcome.all_succeeded());
        assert_eq!(outcome.failed_record_ids(), vec![1]);
    }
}

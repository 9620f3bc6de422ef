//! # Batch Dispatcher
//!
//! Sequences multiple dispatches against one sending account. Strictly
//! sequential: the account sequence number makes parallel submission a
//! race. A fixed inter-item delay further reduces sequence contention.
//! Best-effort semantics: every item gets an outcome, failures never abort
//! the batch, and callers retry only the failed subset.

use crate::domain::{BatchItem, BatchItemOutcome, BatchOutcome, Destination, DispatchRequest};
use crate::ports::inbound::DispatchApi;
use shared_types::{Hash, LifecycleAction};
use std::time::Duration;
use tracing::{info, warn};

/// Sequential batch layer over any [`DispatchApi`].
pub struct BatchDispatcher<D> {
    api: D,
    inter_item_delay: Duration,
}

impl<D: DispatchApi> BatchDispatcher<D> {
    /// Wrap a dispatch client with the given inter-item delay.
    pub fn new(api: D, inter_item_delay: Duration) -> Self {
        Self {
            api,
            inter_item_delay,
        }
    }

    /// Dispatch every item, one at a time, in input order.
    pub async fn dispatch_batch(
        &self,
        source_tx_hash: Hash,
        action: LifecycleAction,
        items: Vec<BatchItem>,
        destination: &Destination,
    ) -> BatchOutcome {
        let total = items.len();
        let mut outcome = BatchOutcome::default();

        for (index, item) in items.into_iter().enumerate() {
            if index > 0 && !self.inter_item_delay.is_zero() {
                tokio::time::sleep(self.inter_item_delay).await;
            }

            let record_id = item.record_id;
            let request = DispatchRequest {
                action: action.clone(),
                record_id,
                data_hash: item.data_hash,
                content_cid: item.content_cid,
            };

            let result = self.api.dispatch(source_tx_hash, request, destination).await;
            if let Err(ref e) = result {
                warn!(
                    record_id,
                    item = index + 1,
                    total,
                    error = %e,
                    remediation = e.remediation(),
                    "batch item failed"
                );
                outcome.failed += 1;
            }
            outcome.items.push(BatchItemOutcome { record_id, result });
        }

        info!(
            total,
            failed = outcome.failed,
            "batch dispatch completed"
        );
        outcome
    }
}

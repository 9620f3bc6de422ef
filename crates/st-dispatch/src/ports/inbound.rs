//! # Inbound Port
//!
//! What callers (the registry, operational tooling, the batch layer) can
//! ask of the dispatch subsystem.

use crate::domain::{Destination, DispatchError, DispatchReceipt, DispatchRequest};
use async_trait::async_trait;
use shared_types::{DomainId, Hash, U256};

/// Dispatch API - inbound port.
#[async_trait]
pub trait DispatchApi: Send + Sync {
    /// Quote the relay fee for a destination, falling back to the
    /// configured minimum when the oracle is unavailable.
    async fn quote_fee(
        &self,
        destination: DomainId,
        gas_estimate: u64,
    ) -> Result<U256, DispatchError>;

    /// Relay one lifecycle event: encode, fund, submit, wait for inclusion.
    ///
    /// `source_tx_hash` is the confirmed source-ledger transaction the
    /// event originated from.
    async fn dispatch(
        &self,
        source_tx_hash: Hash,
        request: DispatchRequest,
        destination: &Destination,
    ) -> Result<DispatchReceipt, DispatchError>;
}

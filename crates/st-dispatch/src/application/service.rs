//! # Dispatch Client
//!
//! Orchestrates one relay: allocate a message nonce, encode the canonical
//! payload, quote the fee, preflight the payer balance, submit through the
//! outbound gateway, and wait for inclusion.

use crate::application::nonce::NonceAllocator;
use crate::config::DispatchConfig;
use crate::domain::{Destination, DispatchError, DispatchReceipt, DispatchRequest};
use crate::ports::inbound::DispatchApi;
use crate::ports::outbound::{FeeOracle, LedgerClient, LedgerError, TxRequest};
use async_trait::async_trait;
use shared_types::{clock::unix_now, DomainId, Hash, U256};
use st_codec::CrossChainMessage;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Frame a canonical message for the outbound gateway call:
/// `domain (4, BE) || recipient (32) || message bytes`.
pub fn frame_gateway_call(destination: &Destination, message: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 32 + message.len());
    data.extend_from_slice(&destination.domain.to_be_bytes());
    data.extend_from_slice(&destination.recipient);
    data.extend_from_slice(message);
    data
}

/// Split a gateway call frame back into destination and message bytes.
/// Used by relayers and tests; the dispatch path only frames.
pub fn parse_gateway_call(data: &[u8]) -> Option<(Destination, &[u8])> {
    if data.len() < 36 {
        return None;
    }
    let domain = DomainId::from_be_bytes(data[..4].try_into().ok()?);
    let mut recipient = [0u8; 32];
    recipient.copy_from_slice(&data[4..36]);
    Some((Destination { domain, recipient }, &data[36..]))
}

/// Source-side dispatch client.
pub struct DispatchClient<L, F> {
    ledger: Arc<L>,
    oracle: F,
    config: DispatchConfig,
    nonces: NonceAllocator,
}

impl<L: LedgerClient, F: FeeOracle> DispatchClient<L, F> {
    /// Create a client. Fails fast on an unusable configuration.
    pub fn new(ledger: Arc<L>, oracle: F, config: DispatchConfig) -> Result<Self, DispatchError> {
        if config.outbound_gateway == [0u8; 20] {
            return Err(DispatchError::Config(
                "outbound gateway address is unset".to_string(),
            ));
        }
        if config.payer == [0u8; 20] {
            return Err(DispatchError::Config("payer address is unset".to_string()));
        }
        if config.max_submit_attempts == 0 {
            return Err(DispatchError::Config(
                "max_submit_attempts must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            ledger,
            oracle,
            config,
            nonces: NonceAllocator::new(),
        })
    }

    fn map_ledger_error(&self, err: LedgerError, tx_hash: Option<Hash>) -> DispatchError {
        match err {
            LedgerError::InsufficientFunds => DispatchError::InsufficientFunds {
                needed: U256::zero(),
                available: U256::zero(),
            },
            LedgerError::InvalidRecipient => DispatchError::InvalidRecipient,
            LedgerError::Reverted(reason) => DispatchError::Reverted { reason },
            LedgerError::SequenceConflict => DispatchError::NonceConflict,
            LedgerError::ReceiptTimeout => DispatchError::Timeout {
                tx_hash: tx_hash.unwrap_or([0u8; 32]),
            },
            LedgerError::Network(detail) => DispatchError::Network(detail),
        }
    }

    /// Gas estimate with padding; degrades to the configured default.
    async fn padded_gas_estimate(&self, data: &[u8]) -> u64 {
        match self
            .ledger
            .estimate_gas(self.config.outbound_gateway, data, U256::zero())
            .await
        {
            Ok(estimate) => self.config.padded_gas(estimate),
            Err(e) => {
                warn!(
                    error = %e,
                    default = self.config.default_gas_limit,
                    "gas estimation failed, using default limit"
                );
                self.config.default_gas_limit
            }
        }
    }

    /// Submit with bounded retry on transient failures. The account
    /// sequence is re-fetched on every attempt so a retry never reuses a
    /// consumed sequence number.
    async fn submit_with_retry(
        &self,
        data: &[u8],
        fee: U256,
        gas_limit: u64,
        gas_price: U256,
    ) -> Result<Hash, DispatchError> {
        let mut backoff = Duration::from_millis(self.config.backoff_base_ms);
        let mut last_err = DispatchError::Network("no attempts made".to_string());

        for attempt in 1..=self.config.max_submit_attempts {
            let sequence = match self.ledger.get_transaction_count(self.config.payer).await {
                Ok(seq) => seq,
                Err(e) => {
                    let mapped = self.map_ledger_error(e, None);
                    if !mapped.is_transient() {
                        return Err(mapped);
                    }
                    last_err = mapped;
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                    continue;
                }
            };

            let tx = TxRequest {
                from: self.config.payer,
                to: self.config.outbound_gateway,
                data: data.to_vec(),
                value: fee,
                gas_limit,
                gas_price,
                sequence,
            };

            match self.ledger.submit(tx).await {
                Ok(tx_hash) => return Ok(tx_hash),
                Err(e) => {
                    let mapped = self.map_ledger_error(e, None);
                    if !mapped.is_transient() {
                        return Err(mapped);
                    }
                    warn!(attempt, error = %mapped, "transient submit failure");
                    last_err = mapped;
                    if attempt < self.config.max_submit_attempts {
                        tokio::time::sleep(backoff).await;
                        backoff *= 2;
                    }
                }
            }
        }
        Err(last_err)
    }
}

#[async_trait]
impl<L: LedgerClient, F: FeeOracle> DispatchApi for DispatchClient<L, F> {
    async fn quote_fee(
        &self,
        destination: DomainId,
        gas_estimate: u64,
    ) -> Result<U256, DispatchError> {
        match self.oracle.quote_gas_payment(destination, gas_estimate).await {
            Ok(fee) => Ok(fee),
            Err(e) => {
                warn!(
                    destination,
                    error = %e,
                    fallback = %self.config.oracle_fallback_fee,
                    "fee oracle unavailable, using fixed minimum fee"
                );
                Ok(self.config.oracle_fallback_fee)
            }
        }
    }

    async fn dispatch(
        &self,
        source_tx_hash: Hash,
        request: DispatchRequest,
        destination: &Destination,
    ) -> Result<DispatchReceipt, DispatchError> {
        let correlation_id = Uuid::new_v4();
        let nonce = self.nonces.next();

        let message = CrossChainMessage {
            nonce,
            action: request.action.clone(),
            record_id: request.record_id,
            data_hash: request.data_hash,
            content_cid: request.content_cid.clone(),
            source_tx_hash,
            timestamp: unix_now(),
        };
        let payload = st_codec::encode(&message);
        let data = frame_gateway_call(destination, &payload);

        debug!(
            %correlation_id,
            record_id = request.record_id,
            action = %request.action,
            payload_len = payload.len(),
            "dispatch prepared"
        );

        let gas_limit = self.padded_gas_estimate(&data).await;
        let fee = self.quote_fee(destination.domain, gas_limit).await?;

        let gas_price = self
            .ledger
            .get_gas_price()
            .await
            .map_err(|e| self.map_ledger_error(e, None))?;

        // Preflight: fail fast instead of submitting a doomed transaction.
        let balance = self
            .ledger
            .get_balance(self.config.payer)
            .await
            .map_err(|e| self.map_ledger_error(e, None))?;
        let needed = fee + gas_price * U256::from(gas_limit);
        if balance < needed {
            return Err(DispatchError::InsufficientFunds {
                needed,
                available: balance,
            });
        }

        let tx_hash = self.submit_with_retry(&data, fee, gas_limit, gas_price).await?;

        // The adapter may give up on its own; this bound holds either way.
        let wait = Duration::from_secs(self.config.receipt_timeout_secs);
        let receipt = match tokio::time::timeout(wait, self.ledger.wait_for_receipt(tx_hash)).await
        {
            Ok(Ok(receipt)) => receipt,
            Ok(Err(e)) => return Err(self.map_ledger_error(e, Some(tx_hash))),
            Err(_) => return Err(DispatchError::Timeout { tx_hash }),
        };
        if !receipt.success {
            return Err(DispatchError::Reverted {
                reason: "gateway execution failed".to_string(),
            });
        }

        info!(
            %correlation_id,
            record_id = request.record_id,
            nonce = %nonce,
            tx = %hex::encode(&tx_hash[..8]),
            block = receipt.block_height,
            fee = %fee,
            "message dispatched"
        );

        Ok(DispatchReceipt {
            correlation_id,
            message_nonce: nonce,
            tx_hash,
            block_height: receipt.block_height,
            fee_paid: fee,
            gas_limit,
        })
    }
}

//! # Mock Ledger Client
//!
//! In-memory [`LedgerClient`] with failure injection. Tests and local runs
//! use it both as the submission target and as the relayer's read surface:
//! submitted transactions are observable via [`MockLedgerClient::submitted`].

use crate::ports::outbound::{LedgerClient, LedgerError, TxReceipt, TxRequest};
use async_trait::async_trait;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use shared_types::{Address, Hash, U256};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use tracing::debug;

#[derive(Default)]
struct LedgerState {
    balances: HashMap<Address, U256>,
    sequences: HashMap<Address, u64>,
    call_responses: HashMap<Address, Vec<u8>>,
    submitted: Vec<TxRequest>,
    receipts: HashMap<Hash, TxReceipt>,
    height: u64,
}

/// In-memory ledger with failure injection.
pub struct MockLedgerClient {
    state: RwLock<LedgerState>,
    gas_price: U256,
    fail_submits: AtomicU32,
    receipt_timeout: AtomicBool,
    estimate_failure: AtomicBool,
}

impl MockLedgerClient {
    /// Create an empty ledger with a 1 gwei gas price.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LedgerState::default()),
            gas_price: U256::from(1_000_000_000u64),
            fail_submits: AtomicU32::new(0),
            receipt_timeout: AtomicBool::new(false),
            estimate_failure: AtomicBool::new(false),
        }
    }

    /// Set an account balance.
    pub fn set_balance(&self, address: Address, balance: U256) {
        self.state.write().balances.insert(address, balance);
    }

    /// Register the response of a read-only call to `address`.
    pub fn set_call_response(&self, address: Address, response: Vec<u8>) {
        self.state.write().call_responses.insert(address, response);
    }

    /// Fail the next `n` submissions with a transient network error.
    pub fn fail_next_submits(&self, n: u32) {
        self.fail_submits.store(n, Ordering::SeqCst);
    }

    /// Make every receipt wait time out.
    pub fn set_receipt_timeout(&self, timeout: bool) {
        self.receipt_timeout.store(timeout, Ordering::SeqCst);
    }

    /// Make gas estimation fail.
    pub fn set_estimate_failure(&self, fail: bool) {
        self.estimate_failure.store(fail, Ordering::SeqCst);
    }

    /// Transactions accepted so far, in submission order.
    pub fn submitted(&self) -> Vec<TxRequest> {
        self.state.read().submitted.clone()
    }

    /// Hash of the `n`-th accepted transaction.
    pub fn submitted_tx_hash(&self, n: usize) -> Option<Hash> {
        let state = self.state.read();
        state.submitted.get(n).map(|tx| tx_hash_of(tx))
    }
}

impl Default for MockLedgerClient {
    fn default() -> Self {
        Self::new()
    }
}

fn tx_hash_of(tx: &TxRequest) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(&tx.data);
    hasher.update(tx.sequence.to_be_bytes());
    hasher.update(tx.to);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

#[async_trait]
impl LedgerClient for MockLedgerClient {
    async fn submit(&self, tx: TxRequest) -> Result<Hash, LedgerError> {
        if self
            .fail_submits
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(LedgerError::Network("injected submit failure".to_string()));
        }

        let mut state = self.state.write();
        let tx_hash = tx_hash_of(&tx);
        state.height += 1;
        let receipt = TxReceipt {
            tx_hash,
            block_height: state.height,
            success: true,
            gas_used: tx.gas_limit / 2,
        };
        debug!(
            tx = %hex::encode(&tx_hash[..8]),
            height = receipt.block_height,
            "mock ledger accepted transaction"
        );
        state.receipts.insert(tx_hash, receipt);
        // Advance the sender's sequence on acceptance.
        *state.sequences.entry(tx.from).or_insert(0) += 1;
        state.submitted.push(tx);
        Ok(tx_hash)
    }

    async fn call(&self, address: Address, _data: &[u8]) -> Result<Vec<u8>, LedgerError> {
        self.state
            .read()
            .call_responses
            .get(&address)
            .cloned()
            .ok_or_else(|| LedgerError::Reverted("no contract at address".to_string()))
    }

    async fn get_balance(&self, address: Address) -> Result<U256, LedgerError> {
        Ok(self
            .state
            .read()
            .balances
            .get(&address)
            .copied()
            .unwrap_or_default())
    }

    async fn get_transaction_count(&self, address: Address) -> Result<u64, LedgerError> {
        Ok(self
            .state
            .read()
            .sequences
            .get(&address)
            .copied()
            .unwrap_or(0))
    }

    async fn get_gas_price(&self) -> Result<U256, LedgerError> {
        Ok(self.gas_price)
    }

    async fn estimate_gas(
        &self,
        _to: Address,
        data: &[u8],
        _value: U256,
    ) -> Result<u64, LedgerError> {
        if self.estimate_failure.load(Ordering::SeqCst) {
            return Err(LedgerError::Reverted("estimation reverted".to_string()));
        }
        // Flat base cost plus a per-byte charge, like a real node would report.
        Ok(21_000 + data.len() as u64 * 16)
    }

    async fn wait_for_receipt(&self, tx_hash: Hash) -> Result<TxReceipt, LedgerError> {
        if self.receipt_timeout.load(Ordering::SeqCst) {
            return Err(LedgerError::ReceiptTimeout);
        }
        self.state
            .read()
            .receipts
            .get(&tx_hash)
            .cloned()
            .ok_or_else(|| LedgerError::Network("unknown transaction".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(seq: u64) -> TxRequest {
        TxRequest {
            from: [0xAA; 20],
            to: [0xBB; 20],
            data: vec![1, 2, 3],
            value: U256::one(),
            gas_limit: 100_000,
            gas_price: U256::from(1_000_000_000u64),
            sequence: seq,
        }
    }

    #[tokio::test]
    async fn test_submit_then_receipt() {
        let ledger = MockLedgerClient::new();
        let hash = ledger.submit(tx(0)).await.unwrap();
        let receipt = ledger.wait_for_receipt(hash).await.unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.block_height, 1);
    }

    #[tokio::test]
    async fn test_sequence_advances_per_accepted_submission() {
        let ledger = MockLedgerClient::new();
        assert_eq!(ledger.get_transaction_count([0xAA; 20]).await.unwrap(), 0);

        ledger.submit(tx(0)).await.unwrap();
        assert_eq!(ledger.get_transaction_count([0xAA; 20]).await.unwrap(), 1);

        ledger.submit(tx(1)).await.unwrap();
        assert_eq!(ledger.get_transaction_count([0xAA; 20]).await.unwrap(), 2);

        // Other accounts are unaffected.
        assert_eq!(ledger.get_transaction_count([0xCC; 20]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rejected_submission_consumes_no_sequence() {
        let ledger = MockLedgerClient::new();
        ledger.fail_next_submits(1);
        assert!(ledger.submit(tx(0)).await.is_err());
        assert_eq!(ledger.get_transaction_count([0xAA; 20]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_injected_failures_consume() {
        let ledger = MockLedgerClient::new();
        ledger.fail_next_submits(1);
        assert!(ledger.submit(tx(0)).await.is_err());
        assert!(ledger.submit(tx(1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_estimate_scales_with_data() {
        let ledger = MockLedgerClient::new();
        let small = ledger.estimate_gas([0; 20], &[0; 10], U256::zero()).await.unwrap();
        let large = ledger.estimate_gas([0; 20], &[0; 100], U256::zero()).await.unwrap();
        assert!(large > small);
    }

    #[tokio::test]
    async fn test_call_unknown_address_reverts() {
        let ledger = MockLedgerClient::new();
        assert!(matches!(
            ledger.call([0x01; 20], &[]).await,
            Err(LedgerError::Reverted(_))
        ));
    }
}

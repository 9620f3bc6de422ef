//! # Outbound Ports
//!
//! Traits for the ledger and fee-oracle collaborators. The dispatch client
//! depends only on these surfaces, never on a concrete ledger
//! implementation.

use async_trait::async_trait;
use shared_types::{Address, DomainId, Hash, U256};
use thiserror::Error;

/// Failures surfaced by a ledger client.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// Payer cannot cover value plus gas.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// The node rejected the recipient address.
    #[error("Invalid recipient")]
    InvalidRecipient,

    /// Execution reverted.
    #[error("Reverted: {0}")]
    Reverted(String),

    /// Account sequence already used.
    #[error("Sequence conflict")]
    SequenceConflict,

    /// Receipt wait exceeded its deadline.
    #[error("Receipt timeout")]
    ReceiptTimeout,

    /// Transient transport failure.
    #[error("Network: {0}")]
    Network(String),
}

/// A transaction ready for submission.
#[derive(Clone, Debug)]
pub struct TxRequest {
    /// Sending account.
    pub from: Address,
    /// Target contract.
    pub to: Address,
    /// Call data (the encoded cross-chain message, gateway-framed).
    pub data: Vec<u8>,
    /// Native value attached (the relay fee).
    pub value: U256,
    /// Gas limit.
    pub gas_limit: u64,
    /// Gas price.
    pub gas_price: U256,
    /// Account transaction sequence, fetched fresh per submission.
    pub sequence: u64,
}

/// A confirmed transaction.
#[derive(Clone, Debug)]
pub struct TxReceipt {
    /// Transaction hash.
    pub tx_hash: Hash,
    /// Inclusion height.
    pub block_height: u64,
    /// Whether execution succeeded.
    pub success: bool,
    /// Gas consumed.
    pub gas_used: u64,
}

/// Ledger collaborator - outbound port.
///
/// The underlying ledger is an opaque append-only log with submit / read /
/// event primitives; signing happens behind `submit`.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Sign and submit a transaction, returning its hash.
    async fn submit(&self, tx: TxRequest) -> Result<Hash, LedgerError>;

    /// Read-only contract call.
    async fn call(&self, address: Address, data: &[u8]) -> Result<Vec<u8>, LedgerError>;

    /// Native balance of an account.
    async fn get_balance(&self, address: Address) -> Result<U256, LedgerError>;

    /// Account transaction sequence number.
    async fn get_transaction_count(&self, address: Address) -> Result<u64, LedgerError>;

    /// Current gas price.
    async fn get_gas_price(&self) -> Result<U256, LedgerError>;

    /// Estimate gas for a call.
    async fn estimate_gas(&self, to: Address, data: &[u8], value: U256)
        -> Result<u64, LedgerError>;

    /// Block until the transaction is included or the deadline passes.
    async fn wait_for_receipt(&self, tx_hash: Hash) -> Result<TxReceipt, LedgerError>;
}

/// Fee oracle failures. Any of these triggers the fixed-fee fallback.
#[derive(Debug, Clone, Error)]
pub enum OracleError {
    /// No oracle deployed for the destination.
    #[error("No fee oracle for domain {0}")]
    MissingOracle(DomainId),

    /// The oracle call reverted.
    #[error("Oracle reverted: {0}")]
    Reverted(String),

    /// Transport failure or timeout.
    #[error("Oracle unavailable: {0}")]
    Unavailable(String),
}

/// Gas-payment oracle - outbound port.
#[async_trait]
pub trait FeeOracle: Send + Sync {
    /// Quote the relay fee for delivering `gas_estimate` units of work on
    /// the destination domain.
    async fn quote_gas_payment(
        &self,
        destination: DomainId,
        gas_estimate: u64,
    ) -> Result<U256, OracleError>;
}

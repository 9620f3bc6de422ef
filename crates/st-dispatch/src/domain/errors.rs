//! # Dispatch Errors
//!
//! Classified failure modes of one dispatch attempt. Each class carries a
//! recommended remediation surfaced to the operator; nothing at this layer
//! retries automatically except bounded backoff on the transient class.

use shared_types::{Hash, U256};
use thiserror::Error;

/// Dispatch failure classification.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// Invalid client configuration. Fatal at startup, never retried.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Payer balance below fee plus gas cost. Checked before submission.
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds {
        /// Total required (fee + gas cost).
        needed: U256,
        /// Payer balance observed.
        available: U256,
    },

    /// The gateway or destination contract rejected the recipient.
    #[error("Invalid recipient")]
    InvalidRecipient,

    /// The gateway reverted the submission.
    #[error("Transaction reverted: {reason}")]
    Reverted {
        /// Revert reason, if the node surfaced one.
        reason: String,
    },

    /// Account sequence collided with a concurrent submission.
    #[error("Account sequence conflict")]
    NonceConflict,

    /// Inclusion wait timed out. The outcome is UNKNOWN: the transaction
    /// may still land. Re-query the ledger before any retry.
    #[error("Timed out waiting for receipt of {tx}", tx = hex::encode(.tx_hash))]
    Timeout {
        /// Transaction whose outcome is unknown.
        tx_hash: Hash,
    },

    /// Transient RPC failure. Retried with backoff up to the configured
    /// attempt bound, then surfaced.
    #[error("Network error: {0}")]
    Network(String),
}

impl DispatchError {
    /// Operator-facing remediation for this failure class.
    pub fn remediation(&self) -> &'static str {
        match self {
            Self::Config(_) => "fix the client configuration and restart; this is never retried",
            Self::InsufficientFunds { .. } => "fund the payer account, then resubmit",
            Self::InvalidRecipient => "check the destination contract address and domain id",
            Self::Reverted { .. } => "inspect the gateway revert reason; do not resubmit unchanged",
            Self::NonceConflict => "wait for in-flight transactions to settle, then resubmit",
            Self::Timeout { .. } => {
                "outcome unknown: query the ledger for the tx hash before resubmitting"
            }
            Self::Network(_) => "check RPC endpoint health; safe to retry after backoff",
        }
    }

    /// Whether bounded automatic retry is permitted for this class.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

//! # Verifier Errors
//!
//! Every variant of [`VerificationError`] except `Config` is terminal for
//! exactly one message: the message is rejected, counted, and processing
//! of later messages is unaffected. None of them is ever retried;
//! redelivering a replayed or malformed message cannot change the outcome.

use shared_types::{Address, DomainId, Hash, RecordId, U256};
use st_codec::CodecError;
use thiserror::Error;

/// Rejection reasons of the verification pipeline.
#[derive(Debug, Clone, Error)]
pub enum VerificationError {
    /// Invalid receiver configuration. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Delivery attempted by something other than the registered gateway.
    #[error("Unauthorized caller: {caller}", caller = hex::encode(.caller))]
    UnauthorizedCaller {
        /// The rejected caller.
        caller: Address,
    },

    /// Message claims an origin domain other than the configured source.
    #[error("Invalid origin domain: expected {expected}, got {got}")]
    InvalidOriginDomain {
        /// Configured source domain.
        expected: DomainId,
        /// Domain the envelope declared.
        got: DomainId,
    },

    /// Message claims a sender other than the configured source contract.
    #[error("Invalid origin sender: {sender}", sender = hex::encode(.got))]
    InvalidOriginSender {
        /// Sender the envelope declared.
        got: Hash,
    },

    /// The payload did not decode as a canonical message.
    #[error("Malformed message: {0}")]
    Malformed(#[from] CodecError),

    /// Exact payload already accepted once (relay retry or replay).
    #[error("Duplicate message: {hash}", hash = hex::encode(.message_hash))]
    DuplicateMessage {
        /// Hash of the replayed wire bytes.
        message_hash: Hash,
    },

    /// Nonce already consumed under a different payload.
    #[error("Duplicate nonce: {nonce}")]
    DuplicateNonce {
        /// The reused nonce.
        nonce: U256,
    },

    /// Sender timestamp is ahead of the receiver's clock.
    #[error("Future timestamp: {timestamp} > now {now}")]
    FutureTimestamp {
        /// Sender timestamp.
        timestamp: u64,
        /// Receiver clock at processing time.
        now: u64,
    },

    /// Message is older than the freshness window.
    #[error("Message expired: age {age_secs}s exceeds {max_age_secs}s")]
    MessageExpired {
        /// Observed age in seconds.
        age_secs: u64,
        /// Configured window.
        max_age_secs: u64,
    },
}

/// Read-side errors. `NotFound` is a normal negative result callers
/// branch on, not a failure of the query service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No attestation for the record id.
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    /// Pagination offset at or beyond the index length.
    #[error("Invalid offset {offset} for index of length {len}")]
    InvalidOffset {
        /// Requested offset.
        offset: usize,
        /// Current index length.
        len: usize,
    },
}

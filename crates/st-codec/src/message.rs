//! # Cross-Chain Message
//!
//! The 7-tuple relayed from the source ledger to the destination ledger.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::{Hash, LifecycleAction, RecordId, U256};

/// The wire payload of one lifecycle attestation.
///
/// Invariants: `nonce` is globally unique per sender; `timestamp` is set by
/// the sender at encode time and must not be in the receiver's future when
/// processed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossChainMessage {
    /// Monotonically increasing, globally unique per sender.
    pub nonce: U256,
    /// Lifecycle action tag.
    pub action: LifecycleAction,
    /// Domain entity identifier.
    pub record_id: RecordId,
    /// Merkle root of the record's salted fields.
    pub data_hash: Hash,
    /// Content address of the off-ledger salted bundle.
    pub content_cid: String,
    /// Hash of the originating ledger transaction.
    pub source_tx_hash: Hash,
    /// Sender-side Unix timestamp, seconds.
    pub timestamp: u64,
}

impl CrossChainMessage {
    /// Short hex prefix of the data hash, for logs.
    pub fn data_hash_prefix(&self) -> String {
        hex::encode(&self.data_hash[..4])
    }
}

/// SHA-256 of the exact wire bytes. This is the replay-guard key: the same
/// encoded message always hashes to the same value.
pub fn message_hash(raw: &[u8]) -> Hash {
    let digest = Sha256::digest(raw);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

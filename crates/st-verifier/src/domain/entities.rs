//! # Verifier Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, DomainId, Hash, LifecycleAction, RecordId, U256};

/// What the gateway hands the verifier: who called, where the message
/// claims to come from, and the raw payload bytes.
#[derive(Clone, Debug)]
pub struct InboundEnvelope {
    /// Caller delivering the message.
    pub caller: Address,
    /// Origin domain the relay attached.
    pub origin_domain: DomainId,
    /// Origin contract identifier the relay attached.
    pub origin_sender: Hash,
    /// Canonical message bytes.
    pub payload: Vec<u8>,
}

/// Durable attestation, one per record id, last write wins.
///
/// Holds the digest of the content CID rather than the CID itself; the
/// receiver never needs to resolve the blob.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationRecord {
    /// Nonce of the committing message.
    pub nonce: U256,
    /// Attested lifecycle action.
    pub action: LifecycleAction,
    /// Merkle root anchored on the source ledger.
    pub data_hash: Hash,
    /// SHA-256 of the content CID string.
    pub content_cid_hash: Hash,
    /// Source-ledger transaction the event originated from.
    pub source_tx_hash: Hash,
    /// Timestamp taken from the message, not the wall clock at receipt.
    pub received_at: u64,
}

/// Emitted on every successful commit; the surface downstream indexers
/// and alerting consume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayEvent {
    /// Origin domain of the committed message.
    pub origin_domain: DomainId,
    /// Message nonce.
    pub nonce: U256,
    /// Record the attestation belongs to.
    pub record_id: RecordId,
    /// Attested action.
    pub action: LifecycleAction,
    /// Anchored Merkle root.
    pub data_hash: Hash,
    /// Originating source-ledger transaction.
    pub source_tx_hash: Hash,
}

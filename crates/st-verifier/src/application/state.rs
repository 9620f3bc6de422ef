//! # Verifier State
//!
//! Everything the receiver persists, held together so one write lock
//! covers the whole commit. The replay sets are append-only for the
//! lifetime of the receiver and are never pruned: unbounded growth is the
//! accepted cost of permanent replay protection.

use crate::domain::{AttestationRecord, GatewayEvent};
use shared_types::{Hash, RecordId, U256};
use std::collections::{HashMap, HashSet};

#[derive(Default)]
pub(crate) struct VerifierState {
    /// One attestation per record id, last write wins.
    pub records: HashMap<RecordId, AttestationRecord>,
    /// Digests of every accepted wire payload.
    pub processed_hashes: HashSet<Hash>,
    /// Every accepted message nonce.
    pub processed_nonces: HashSet<U256>,
    /// Record ids in first-verification order. Not touched on overwrite.
    pub verified_index: Vec<RecordId>,
    /// Membership set guarding against duplicate index appends.
    pub indexed: HashSet<RecordId>,
    /// Gateway events in commit order.
    pub events: Vec<GatewayEvent>,
    /// Messages rejected so far.
    pub rejected_count: u64,
}

impl VerifierState {
    /// Apply the four commit side effects as one unit. The caller holds
    /// the write lock; nothing here can fail, so the commit is atomic by
    /// construction.
    pub fn commit(
        &mut self,
        record_id: RecordId,
        record: AttestationRecord,
        message_hash: Hash,
        event: GatewayEvent,
    ) {
        self.records.insert(record_id, record);
        self.processed_hashes.insert(message_hash);
        self.processed_nonces.insert(event.nonce);
        if self.indexed.insert(record_id) {
            self.verified_index.push(record_id);
        }
        self.events.push(event);
    }
}

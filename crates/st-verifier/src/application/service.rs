//! # Verifier Service
//!
//! The receiver: one check pipeline per inbound message, an atomic commit,
//! and the read-only query surface over the committed state.

use crate::application::state::VerifierState;
use crate::config::VerifierConfig;
use crate::domain::{
    check_caller, check_freshness, check_origin_domain, check_origin_sender, AttestationRecord,
    GatewayEvent, InboundEnvelope, QueryError, VerificationError,
};
use crate::ports::{AttestationQueryApi, VerificationApi};
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use shared_types::{Hash, RecordId};
use st_codec::message_hash;
use tracing::{info, warn};

/// Destination-side verification state machine plus query service.
pub struct VerifierService {
    config: VerifierConfig,
    state: RwLock<VerifierState>,
}

impl VerifierService {
    /// Create a verifier. Fails fast on an unusable configuration.
    pub fn new(config: VerifierConfig) -> Result<Self, VerificationError> {
        config.validate()?;
        Ok(Self {
            config,
            state: RwLock::new(VerifierState::default()),
        })
    }

    /// Gateway events in commit order.
    pub fn events(&self) -> Vec<GatewayEvent> {
        self.state.read().events.clone()
    }

    /// Messages rejected since startup.
    pub fn rejected_count(&self) -> u64 {
        self.state.read().rejected_count
    }

    fn reject(&self, err: VerificationError) -> VerificationError {
        self.state.write().rejected_count += 1;
        warn!(error = %err, "inbound message rejected");
        err
    }
}

fn cid_hash(cid: &str) -> Hash {
    let digest = Sha256::digest(cid.as_bytes());
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

impl VerificationApi for VerifierService {
    fn process(
        &self,
        envelope: InboundEnvelope,
        now: u64,
    ) -> Result<GatewayEvent, VerificationError> {
        // Origin checks need no state.
        check_caller(&envelope.caller, &self.config.gateway).map_err(|e| self.reject(e))?;
        check_origin_domain(envelope.origin_domain, self.config.origin_domain)
            .map_err(|e| self.reject(e))?;
        check_origin_sender(&envelope.origin_sender, &self.config.origin_sender)
            .map_err(|e| self.reject(e))?;

        let message = st_codec::decode(&envelope.payload)
            .map_err(|e| self.reject(VerificationError::Malformed(e)))?;
        let msg_hash = message_hash(&envelope.payload);

        // Dedup, freshness, and commit share one write lock so two
        // concurrent duplicates cannot both pass the membership checks.
        let mut state = self.state.write();

        if state.processed_hashes.contains(&msg_hash) {
            state.rejected_count += 1;
            let err = VerificationError::DuplicateMessage {
                message_hash: msg_hash,
            };
            warn!(error = %err, "inbound message rejected");
            return Err(err);
        }
        if state.processed_nonces.contains(&message.nonce) {
            state.rejected_count += 1;
            let err = VerificationError::DuplicateNonce {
                nonce: message.nonce,
            };
            warn!(error = %err, "inbound message rejected");
            return Err(err);
        }
        if let Err(err) = check_freshness(message.timestamp, now, self.config.freshness_window_secs)
        {
            state.rejected_count += 1;
            warn!(error = %err, "inbound message rejected");
            return Err(err);
        }

        let record = AttestationRecord {
            nonce: message.nonce,
            action: message.action.clone(),
            data_hash: message.data_hash,
            content_cid_hash: cid_hash(&message.content_cid),
            source_tx_hash: message.source_tx_hash,
            received_at: message.timestamp,
        };
        let event = GatewayEvent {
            origin_domain: envelope.origin_domain,
            nonce: message.nonce,
            record_id: message.record_id,
            action: message.action.clone(),
            data_hash: message.data_hash,
            source_tx_hash: message.source_tx_hash,
        };
        state.commit(message.record_id, record, msg_hash, event.clone());
        drop(state);

        info!(
            record_id = message.record_id,
            action = %message.action,
            nonce = %message.nonce,
            data_hash = %hex::encode(&message.data_hash[..8]),
            "attestation committed"
        );
        Ok(event)
    }
}

impl AttestationQueryApi for VerifierService {
    fn get_record(&self, record_id: RecordId) -> Result<AttestationRecord, QueryError> {
        self.state
            .read()
            .records
            .get(&record_id)
            .cloned()
            .ok_or(QueryError::NotFound(record_id))
    }

    fn is_verified(&self, record_id: RecordId) -> bool {
        self.state.read().indexed.contains(&record_id)
    }

    fn batch_verify(&self, expectations: &[(RecordId, Hash)]) -> Vec<bool> {
        let state = self.state.read();
        expectations
            .iter()
            .map(|(record_id, expected)| {
                state
                    .records
                    .get(record_id)
                    .map(|record| record.data_hash == *expected)
                    .unwrap_or(false)
            })
            .collect()
    }

    fn list_verified(&self, offset: usize, limit: usize) -> Result<Vec<RecordId>, QueryError> {
        let state = self.state.read();
        let len = state.verified_index.len();
        if offset >= len {
            return Err(QueryError::InvalidOffset { offset, len });
        }
        let end = offset.saturating_add(limit).min(len);
        Ok(state.verified_index[offset..end].to_vec())
    }

    fn verified_count(&self) -> usize {
        self.state.read().verified_index.len()
    }
}

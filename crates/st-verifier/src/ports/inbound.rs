//! # Inbound Ports
//!
//! Write side: message delivery from the gateway. Read side: the
//! attestation query surface.

use crate::domain::{
    AttestationRecord, GatewayEvent, InboundEnvelope, QueryError, VerificationError,
};
use shared_types::{Hash, RecordId};

/// Message delivery - inbound port.
pub trait VerificationApi: Send + Sync {
    /// Run one message through the verification pipeline.
    ///
    /// `now` is the receiver's clock at processing time. Returns the
    /// committed gateway event, or the specific rejection.
    fn process(
        &self,
        envelope: InboundEnvelope,
        now: u64,
    ) -> Result<GatewayEvent, VerificationError>;
}

/// Attestation queries - inbound port. Read-only projections over the
/// verifier's storage.
pub trait AttestationQueryApi: Send + Sync {
    /// Point lookup by record id.
    fn get_record(&self, record_id: RecordId) -> Result<AttestationRecord, QueryError>;

    /// Whether a record has ever been verified.
    fn is_verified(&self, record_id: RecordId) -> bool;

    /// Compare stored data hashes against expectations. Missing records
    /// resolve to `false`, never an error.
    fn batch_verify(&self, expectations: &[(RecordId, Hash)]) -> Vec<bool>;

    /// Page through record ids in first-verification order. `offset` at or
    /// beyond the index length is an error; `offset + limit` clamps.
    fn list_verified(&self, offset: usize, limit: usize) -> Result<Vec<RecordId>, QueryError>;

    /// Number of distinct verified records.
    fn verified_count(&self) -> usize;
}

//! Registry entities.

use serde::{Deserialize, Serialize};
use shared_types::{ContentId, Hash, LifecycleAction, RecordId};

/// A vaccination appended to a pig record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccinationEntry {
    /// Vaccine name or product code.
    pub vaccine: String,
    /// Unix seconds when the dose was administered.
    pub administered_at: u64,
}

/// A sale recorded against a pig record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleEntry {
    /// Buyer identifier.
    pub buyer: String,
    /// Sale price in minor currency units.
    pub price: u64,
    /// Unix seconds when the sale closed.
    pub sold_at: u64,
}

/// The authoritative source-side record for one animal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PigRecord {
    /// Ledger-unique record id, assigned at registration.
    pub id: RecordId,
    /// Physical ear tag, unique among registered animals.
    pub tag: String,
    /// Breed name.
    pub breed: String,
    /// Current owner identifier.
    pub owner: String,
    /// Unix seconds of birth.
    pub born_at: u64,
    /// Vaccination history, append-only.
    pub vaccinations: Vec<VaccinationEntry>,
    /// Sale history, append-only.
    pub sales: Vec<SaleEntry>,
    /// The latest issued QR payload, if any.
    pub qr: Option<String>,
}

/// The attestable output of one lifecycle operation. Carries everything a
/// dispatcher needs to relay the event cross-chain and everything a later
/// verification needs to locate and check the off-ledger bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifecycleEvent {
    /// What happened.
    pub action: LifecycleAction,
    /// The record the event belongs to.
    pub record_id: RecordId,
    /// Merkle root over the operation's salted fields.
    pub data_hash: Hash,
    /// Blob address of the published [`st_integrity::SaltedBundle`].
    pub content_cid: ContentId,
}

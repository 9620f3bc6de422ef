//! Lifecycle operations over the pig registry.
//!
//! Every mutation follows the same shape: assemble the operation's fields
//! in their documented order, draw one fresh salt per field, publish the
//! salted bundle to the blob store, reduce leaves to a Merkle root, and
//! hand back a [`LifecycleEvent`] ready for dispatch.

use crate::entities::{LifecycleEvent, PigRecord, SaleEntry, VaccinationEntry};
use crate::errors::RegistryError;
use parking_lot::RwLock;
use shared_types::{BlobStore, Hash, LifecycleAction, RecordId};
use st_integrity::{build_root, generate_salts, SaltedBundle};
use std::collections::HashMap;
use tracing::info;

#[derive(Default)]
struct RegistryState {
    pigs: HashMap<RecordId, PigRecord>,
    by_tag: HashMap<String, RecordId>,
    /// Root of each record's most recent lifecycle event. QR payloads
    /// embed this so a scanned code points at a provable bundle.
    last_root: HashMap<RecordId, Hash>,
    next_id: RecordId,
}

/// Source-side registry over a blob store.
pub struct RegistryService<B> {
    blobs: B,
    state: RwLock<RegistryState>,
}

impl<B: BlobStore> RegistryService<B> {
    /// Create an empty registry. Record ids start at 1.
    pub fn new(blobs: B) -> Self {
        Self {
            blobs,
            state: RwLock::new(RegistryState {
                next_id: 1,
                ..RegistryState::default()
            }),
        }
    }

    /// Register a new animal. Field ordering: tag, breed, owner, born_at.
    pub async fn register_pig(
        &self,
        tag: &str,
        breed: &str,
        owner: &str,
        born_at: u64,
    ) -> Result<LifecycleEvent, RegistryError> {
        {
            let state = self.state.read();
            if state.by_tag.contains_key(tag) {
                return Err(RegistryError::DuplicateTag(tag.to_string()));
            }
        }

        let fields = vec![
            tag.as_bytes().to_vec(),
            breed.as_bytes().to_vec(),
            owner.as_bytes().to_vec(),
            born_at.to_be_bytes().to_vec(),
        ];
        let (root, cid) = self.publish(&fields).await?;

        let mut state = self.state.write();
        // Re-check under the write lock; another registration may have
        // claimed the tag while the bundle was publishing.
        if state.by_tag.contains_key(tag) {
            return Err(RegistryError::DuplicateTag(tag.to_string()));
        }
        let id = state.next_id;
        state.next_id += 1;
        state.pigs.insert(
            id,
            PigRecord {
                id,
                tag: tag.to_string(),
                breed: breed.to_string(),
                owner: owner.to_string(),
                born_at,
                vaccinations: Vec::new(),
                sales: Vec::new(),
                qr: None,
            },
        );
        state.by_tag.insert(tag.to_string(), id);
        state.last_root.insert(id, root);

        info!(record_id = id, tag, "pig registered");
        Ok(LifecycleEvent {
            action: LifecycleAction::PigRegistered,
            record_id: id,
            data_hash: root,
            content_cid: cid,
        })
    }

    /// Append a vaccination. Field ordering: tag, vaccine, administered_at.
    pub async fn add_vaccination(
        &self,
        id: RecordId,
        vaccine: &str,
        administered_at: u64,
    ) -> Result<LifecycleEvent, RegistryError> {
        let tag = self.tag_of(id)?;

        let fields = vec![
            tag.as_bytes().to_vec(),
            vaccine.as_bytes().to_vec(),
            administered_at.to_be_bytes().to_vec(),
        ];
        let (root, cid) = self.publish(&fields).await?;

        let mut state = self.state.write();
        let record = state.pigs.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        record.vaccinations.push(VaccinationEntry {
            vaccine: vaccine.to_string(),
            administered_at,
        });
        state.last_root.insert(id, root);

        info!(record_id = id, vaccine, "vaccination recorded");
        Ok(LifecycleEvent {
            action: LifecycleAction::VaccineAdded,
            record_id: id,
            data_hash: root,
            content_cid: cid,
        })
    }

    /// Record a sale. Field ordering: tag, buyer, price, sold_at.
    pub async fn record_sale(
        &self,
        id: RecordId,
        buyer: &str,
        price: u64,
        sold_at: u64,
    ) -> Result<LifecycleEvent, RegistryError> {
        let tag = self.tag_of(id)?;

        let fields = vec![
            tag.as_bytes().to_vec(),
            buyer.as_bytes().to_vec(),
            price.to_be_bytes().to_vec(),
            sold_at.to_be_bytes().to_vec(),
        ];
        let (root, cid) = self.publish(&fields).await?;

        let mut state = self.state.write();
        let record = state.pigs.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        record.sales.push(SaleEntry {
            buyer: buyer.to_string(),
            price,
            sold_at,
        });
        state.last_root.insert(id, root);

        info!(record_id = id, buyer, price, "sale recorded");
        Ok(LifecycleEvent {
            action: LifecycleAction::SaleRecorded,
            record_id: id,
            data_hash: root,
            content_cid: cid,
        })
    }

    /// Issue a traceability QR code. The payload is the record id plus the
    /// hex root of the record's most recent event, so a scan resolves to a
    /// provable bundle. Field ordering: tag, payload, issued_at.
    pub async fn generate_qr(
        &self,
        id: RecordId,
        issued_at: u64,
    ) -> Result<LifecycleEvent, RegistryError> {
        let (tag, payload) = {
            let state = self.state.read();
            let record = state.pigs.get(&id).ok_or(RegistryError::NotFound(id))?;
            let root = state.last_root.get(&id).ok_or(RegistryError::NotFound(id))?;
            (record.tag.clone(), format!("{id}:{}", hex::encode(root)))
        };

        let fields = vec![
            tag.as_bytes().to_vec(),
            payload.as_bytes().to_vec(),
            issued_at.to_be_bytes().to_vec(),
        ];
        let (root, cid) = self.publish(&fields).await?;

        let mut state = self.state.write();
        let record = state.pigs.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        record.qr = Some(payload);
        state.last_root.insert(id, root);

        info!(record_id = id, "qr issued");
        Ok(LifecycleEvent {
            action: LifecycleAction::QrGenerated,
            record_id: id,
            data_hash: root,
            content_cid: cid,
        })
    }

    /// Fetch a record by id.
    pub fn get_pig(&self, id: RecordId) -> Result<PigRecord, RegistryError> {
        self.state
            .read()
            .pigs
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    /// Fetch a record by ear tag.
    pub fn get_by_tag(&self, tag: &str) -> Option<PigRecord> {
        let state = self.state.read();
        let id = state.by_tag.get(tag)?;
        state.pigs.get(id).cloned()
    }

    fn tag_of(&self, id: RecordId) -> Result<String, RegistryError> {
        self.state
            .read()
            .pigs
            .get(&id)
            .map(|r| r.tag.clone())
            .ok_or(RegistryError::NotFound(id))
    }

    /// Salt, publish, and reduce one operation's fields.
    async fn publish(
        &self,
        fields: &[Vec<u8>],
    ) -> Result<(Hash, shared_types::ContentId), RegistryError> {
        let salts = generate_salts(fields.len());
        let bundle = SaltedBundle {
            fields: fields.to_vec(),
            salts: salts.clone(),
        };
        let cid = self.blobs.put(&bundle.to_bytes()?).await.map_err(|e| {
            RegistryError::Integrity(st_integrity::IntegrityError::Blob(e))
        })?;
        let root = build_root(fields, &salts)?;
        Ok((root, cid))
    }
}

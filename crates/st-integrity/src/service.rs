//! # Content Verification Service
//!
//! Resolves a content CID to its salted bundle and proves the bundle
//! reduces to an expected Merkle root. Outcomes are memoized in the
//! [`VerificationCache`]; fetch and parse failures are errors, never cached
//! negatives.

use crate::cache::{CacheConfig, VerificationCache};
use crate::errors::IntegrityError;
use crate::merkle::verify_root;
use crate::salt::Salt;
use serde::{Deserialize, Serialize};
use shared_types::{BlobStore, ContentId, Hash, RecordId};
use tracing::{debug, info};

/// The off-ledger payload a lifecycle operation publishes: the record's
/// fields in their documented order, one salt per field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaltedBundle {
    /// Record fields in canonical order.
    pub fields: Vec<Vec<u8>>,
    /// One independent salt per field.
    pub salts: Vec<Salt>,
}

impl SaltedBundle {
    /// Serialize for blob storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, IntegrityError> {
        serde_json::to_vec(self).map_err(|e| IntegrityError::MalformedBundle(e.to_string()))
    }

    /// Parse a bundle fetched from blob storage.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IntegrityError> {
        serde_json::from_slice(bytes).map_err(|e| IntegrityError::MalformedBundle(e.to_string()))
    }
}

/// Content verifier over a blob store.
pub struct IntegrityService<B> {
    blobs: B,
    cache: VerificationCache,
}

impl<B: BlobStore> IntegrityService<B> {
    /// Create a service with default cache TTLs.
    pub fn new(blobs: B) -> Self {
        Self::with_cache(blobs, CacheConfig::default())
    }

    /// Create a service with explicit cache TTLs.
    pub fn with_cache(blobs: B, cache_config: CacheConfig) -> Self {
        Self {
            blobs,
            cache: VerificationCache::new(cache_config),
        }
    }

    /// Verify that the bundle stored under `cid` reduces to `expected_root`.
    ///
    /// Cache key is `(record_id, cid)` so a re-published record does not
    /// collide with its previous bundle.
    pub async fn verify_content(
        &self,
        record_id: RecordId,
        cid: &ContentId,
        expected_root: &Hash,
        now: u64,
    ) -> Result<bool, IntegrityError> {
        let key = format!("{record_id}:{cid}");
        if let Some(cached) = self.cache.get(&key, now) {
            debug!(record_id, %cid, cached, "content verification cache hit");
            return Ok(cached);
        }

        let bytes = self.blobs.get(cid).await?;
        let bundle = SaltedBundle::from_bytes(&bytes)?;
        let verified = verify_root(&bundle.fields, &bundle.salts, expected_root)?;

        self.cache.put(key, verified, now);
        info!(record_id, %cid, verified, "content verification completed");
        Ok(verified)
    }

    /// Number of memoized outcomes.
    pub fn cached_outcomes(&self) -> usize {
        self.cache.len()
    }
}

//! # Blob Store Port
//!
//! Content-addressed blob storage collaborator. Lifecycle operations publish
//! salted field bundles here; the content verifier fetches them back by CID.
//! Retry policy lives in the [`RetryingBlobStore`] decorator, not in core
//! logic.

use async_trait::async_trait;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Content address of a stored blob.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ContentId(pub String);

impl ContentId {
    /// The CID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Blob store errors.
#[derive(Debug, Clone, Error)]
pub enum BlobError {
    /// No blob stored under the given content id.
    #[error("Blob not found: {0}")]
    NotFound(String),

    /// Transport-level failure talking to the store.
    #[error("Blob store unavailable: {0}")]
    Unavailable(String),
}

/// Content-addressed blob storage - outbound port.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes, returning their content address.
    async fn put(&self, bytes: &[u8]) -> Result<ContentId, BlobError>;

    /// Fetch bytes by content address.
    async fn get(&self, cid: &ContentId) -> Result<Vec<u8>, BlobError>;
}

/// In-memory blob store addressed by SHA-256.
///
/// The production deployment talks to an IPFS-style daemon; this adapter
/// keeps the same contract for tests and local runs. Clones share the
/// underlying map so a publisher and a verifier can see the same blobs.
#[derive(Clone, Default)]
pub struct InMemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.blobs.read().is_empty()
    }
}

fn content_address(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("bafy{}", hex::encode(digest))
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(&self, bytes: &[u8]) -> Result<ContentId, BlobError> {
        let cid = content_address(bytes);
        self.blobs.write().insert(cid.clone(), bytes.to_vec());
        Ok(ContentId(cid))
    }

    async fn get(&self, cid: &ContentId) -> Result<Vec<u8>, BlobError> {
        self.blobs
            .read()
            .get(cid.as_str())
            .cloned()
            .ok_or_else(|| BlobError::NotFound(cid.0.clone()))
    }
}

/// Decorator adding bounded retries to any [`BlobStore`].
///
/// Three attempts with a fixed delay; `NotFound` is terminal and never
/// retried (the content either exists or it does not).
pub struct RetryingBlobStore<B> {
    inner: B,
    attempts: u32,
    delay: Duration,
}

impl<B: BlobStore> RetryingBlobStore<B> {
    /// Wrap a store with the default 3-attempt policy.
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            attempts: 3,
            delay: Duration::from_millis(200),
        }
    }

    /// Override attempt count and inter-attempt delay.
    pub fn with_policy(inner: B, attempts: u32, delay: Duration) -> Self {
        Self {
            inner,
            attempts: attempts.max(1),
            delay,
        }
    }
}

#[async_trait]
impl<B: BlobStore> BlobStore for RetryingBlobStore<B> {
    async fn put(&self, bytes: &[u8]) -> Result<ContentId, BlobError> {
        let mut last = None;
        for attempt in 1..=self.attempts {
            match self.inner.put(bytes).await {
                Ok(cid) => return Ok(cid),
                Err(BlobError::NotFound(cid)) => return Err(BlobError::NotFound(cid)),
                Err(e) => {
                    warn!(attempt, error = %e, "blob put failed, retrying");
                    last = Some(e);
                    if attempt < self.attempts {
                        tokio::time::sleep(self.delay).await;
                    }
                }
            }
        }
        Err(last.unwrap_or_else(|| BlobError::Unavailable("no attempts made".into())))
    }

    async fn get(&self, cid: &ContentId) -> Result<Vec<u8>, BlobError> {
        let mut last = None;
        for attempt in 1..=self.attempts {
            match self.inner.get(cid).await {
                Ok(bytes) => return Ok(bytes),
                Err(BlobError::NotFound(c)) => return Err(BlobError::NotFound(c)),
                Err(e) => {
                    warn!(attempt, error = %e, "blob get failed, retrying");
                    last = Some(e);
                    if attempt < self.attempts {
                        tokio::time::sleep(self.delay).await;
                    }
                }
            }
        }
        Err(last.unwrap_or_else(|| BlobError::Unavailable("no attempts made".into())))
    }
}

//! # Verification Result Cache
//!
//! Memoizes content-verification outcomes keyed by record. Positive results
//! are cheap to trust for a while; negative results are cheap to recheck,
//! so they expire sooner. The cache is advisory: a miss always falls
//! through to full recomputation, and replay/freshness checks never consult
//! it.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// TTL configuration for cached outcomes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Lifetime of a `verified == true` entry, seconds (1 hour).
    pub positive_ttl_secs: u64,
    /// Lifetime of a `verified == false` entry, seconds (10 minutes).
    pub negative_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            positive_ttl_secs: 3600,
            negative_ttl_secs: 600,
        }
    }
}

impl CacheConfig {
    /// Small TTLs for tests.
    pub fn for_testing() -> Self {
        Self {
            positive_ttl_secs: 60,
            negative_ttl_secs: 10,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct CacheEntry {
    verified: bool,
    expires_at: u64,
}

/// TTL cache over verification outcomes.
pub struct VerificationCache {
    config: CacheConfig,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl VerificationCache {
    /// Create a cache with the given TTLs.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a cached outcome. Expired entries are evicted and reported
    /// as a miss.
    pub fn get(&self, key: &str, now: u64) -> Option<bool> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if now < entry.expires_at => return Some(entry.verified),
                Some(_) => {}
                None => return None,
            }
        }
        // Expired: evict under the write lock, re-checking under it.
        let mut entries = self.entries.write();
        if let Some(entry) = entries.get(key) {
            if now < entry.expires_at {
                return Some(entry.verified);
            }
            entries.remove(key);
        }
        None
    }

    /// Cache an outcome. The TTL depends on the outcome itself.
    pub fn put(&self, key: impl Into<String>, verified: bool, now: u64) {
        let ttl = if verified {
            self.config.positive_ttl_secs
        } else {
            self.config.negative_ttl_secs
        };
        self.entries.write().insert(
            key.into(),
            CacheEntry {
                verified,
                expires_at: now.saturating_add(ttl),
            },
        );
    }

    /// Number of live and expired entries currently held.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for VerificationCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: u64 = 1_700_000_000;

    #[test]
    fn test_positive_served_at_59_minutes() {
        let cache = VerificationCache::default();
        cache.put("pig-1", true, T0);
        assert_eq!(cache.get("pig-1", T0 + 59 * 60), Some(true));
    }

    #[test]
    fn test_positive_expired_at_61_minutes() {
        let cache = VerificationCache::default();
        cache.put("pig-1", true, T0);
        assert_eq!(cache.get("pig-1", T0 + 61 * 60), None);
        // Eviction happened.
        assert!(cache.is_empty());
    }

    #[test]
    fn test_negative_expired_at_11_minutes() {
        let cache = VerificationCache::default();
        cache.put("pig-2", false, T0);
        assert_eq!(cache.get("pig-2", T0 + 9 * 60), Some(false));
        assert_eq!(cache.get("pig-2", T0 + 11 * 60), None);
    }

    #[test]
    fn test_miss_on_unknown_key() {
        let cache = VerificationCache::default();
        assert_eq!(cache.get("unknown", T0), None);
    }

    #[test]
    fn test_overwrite_resets_ttl_class() {
        let cache = VerificationCache::default();
        cache.put("pig-3", false, T0);
        cache.put("pig-3", true, T0);
        // Now under the positive TTL, not the negative one.
        assert_eq!(cache.get("pig-3", T0 + 30 * 60), Some(true));
    }
}

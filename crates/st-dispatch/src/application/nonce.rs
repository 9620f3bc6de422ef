//! # Message Nonce Allocation
//!
//! Every relayed message carries a nonce that must never repeat for this
//! sender, across process restarts included. The allocator seeds a base
//! from wall-clock nanoseconds at construction and hands out strictly
//! increasing offsets from it. This is distinct from the ledger account
//! sequence, which is fetched fresh per submission.

use shared_types::{clock::unix_now_nanos, U256};
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic message-nonce allocator.
pub struct NonceAllocator {
    base: U256,
    offset: AtomicU64,
}

impl NonceAllocator {
    /// Seed from the wall clock. Two allocators constructed in different
    /// nanoseconds can never collide; the offset keeps one allocator
    /// collision-free within its lifetime.
    pub fn new() -> Self {
        Self::with_base(U256::from(unix_now_nanos()))
    }

    /// Seed from an explicit base (tests).
    pub fn with_base(base: U256) -> Self {
        Self {
            base,
            offset: AtomicU64::new(0),
        }
    }

    /// Allocate the next nonce.
    pub fn next(&self) -> U256 {
        let offset = self.offset.fetch_add(1, Ordering::SeqCst);
        self.base + U256::from(offset)
    }
}

impl Default for NonceAllocator {
    fn default() -> Self {
        Self::new()
    }
}

//! # Shared Types Crate
//!
//! Cross-subsystem primitives for SwineTrace. Both sides of the relay
//! (dispatch on the source ledger, verification on the destination ledger)
//! depend on the types in this crate and nothing else shared.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: types that cross a subsystem boundary live
//!   here, never duplicated per crate.
//! - **Explicit clocks**: time-sensitive operations take `now: u64`
//!   parameters; [`clock::unix_now`] is the single wall-clock read.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blob;
pub mod clock;
pub mod entities;

pub use blob::{BlobError, BlobStore, ContentId, InMemoryBlobStore, RetryingBlobStore};
pub use clock::unix_now;
pub use entities::{Address, DomainId, Hash, LifecycleAction, RecordId, U256};

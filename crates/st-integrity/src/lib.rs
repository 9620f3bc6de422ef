//! # SwineTrace Integrity Engine
//!
//! Proves that a bundle of salted record fields reduces to a previously
//! published Merkle root. Three pieces:
//!
//! - **Merkle engine**: salted leaf hashing, bottom-up tree construction,
//!   pure root recomputation ([`merkle`]).
//! - **Verification cache**: memoizes content-verification outcomes with
//!   asymmetric TTLs ([`cache`]). Advisory only; never the system of record.
//! - **Content verifier**: fetches a salted bundle by CID and checks it
//!   against an expected root ([`service`]).
//!
//! ## Odd-node carry policy
//!
//! When a tree level has an odd node count, the unpaired last node is
//! carried up **unchanged** into the next level. It is not hashed with
//! itself. Build and verify share one folding helper so the policy cannot
//! diverge between them.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cache;
mod errors;
mod merkle;
mod salt;
mod service;

pub use cache::{CacheConfig, VerificationCache};
pub use errors::IntegrityError;
pub use merkle::{build_root, leaf_hash, verify_root};
pub use salt::{generate_salt, generate_salts, Salt};
pub use service::{IntegrityService, SaltedBundle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

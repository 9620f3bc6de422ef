//! # SwineTrace Registry
//!
//! Source-side lifecycle records. The storage itself is a thin key-value
//! write; the interesting part is what each operation produces: a fresh
//! set of salts, a salted bundle published to the blob store, and a Merkle
//! root ready to anchor and relay.
//!
//! Field orderings are fixed per operation and shared with every future
//! re-verification of the same bundle:
//!
//! | Operation    | Fields in order                       |
//! |--------------|---------------------------------------|
//! | registration | tag, breed, owner, born_at            |
//! | vaccination  | tag, vaccine, administered_at         |
//! | sale         | tag, buyer, price, sold_at            |
//! | qr           | tag, payload, issued_at               |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod entities;
mod errors;
mod service;

pub use entities::{LifecycleEvent, PigRecord, SaleEntry, VaccinationEntry};
pub use errors::RegistryError;
pub use service::RegistryService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # SwineTrace Verifier
//!
//! Destination-side verification of relayed lifecycle messages. Each
//! inbound message flows once, synchronously, through a fixed check
//! pipeline:
//!
//! ```text
//! Received -> OriginValidated -> MessageDeduped -> NonceDeduped
//!          -> TimestampValid -> Committed
//! ```
//!
//! Rejection at any step is terminal for that message and leaves all
//! state untouched. The only persistent state is the post-commit side
//! effect: the attestation record, both replay sets, and the verified
//! index, written together under one lock, all or nothing.
//!
//! ## Module Structure
//!
//! ```text
//! st-verifier/
//! ├── domain/          # AttestationRecord, GatewayEvent, errors, invariants
//! ├── ports/           # VerificationApi, AttestationQueryApi
//! └── application/     # VerifierService and its locked state
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use application::VerifierService;
pub use config::VerifierConfig;
pub use domain::{
    AttestationRecord, GatewayEvent, InboundEnvelope, QueryError, VerificationError,
};
pub use ports::{AttestationQueryApi, VerificationApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

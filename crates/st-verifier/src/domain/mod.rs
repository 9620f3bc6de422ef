//! # Verifier Domain

pub mod entities;
pub mod errors;
pub mod invariants;

pub use entities::{AttestationRecord, GatewayEvent, InboundEnvelope};
pub use errors::{QueryError, VerificationError};
pub use invariants::{check_caller, check_freshness, check_origin_domain, check_origin_sender};

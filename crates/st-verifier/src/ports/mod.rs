//! # Verifier Ports

pub mod inbound;

pub use inbound::{AttestationQueryApi, VerificationApi};

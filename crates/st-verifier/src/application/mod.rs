//! # Verifier Application

pub mod service;
mod state;

pub use service::VerifierService;

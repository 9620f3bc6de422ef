//! # SwineTrace Canonical Message Codec
//!
//! Deterministic encoding of the cross-chain message that carries a
//! lifecycle event from the source ledger to the destination ledger. The
//! byte layout is the bit-exact cross-chain contract: field order and
//! widths must match between sender and receiver exactly.
//!
//! ## Wire Layout (big-endian)
//!
//! ```text
//! nonce            32 bytes
//! action_len        4 bytes | action tag (UTF-8)
//! record_id         8 bytes
//! data_hash        32 bytes
//! cid_len           4 bytes | content CID (UTF-8)
//! source_tx_hash   32 bytes
//! timestamp         8 bytes
//! ```
//!
//! The format carries no version byte; the leading bytes are where a
//! version tag would go if the contract ever changes, and adding one is a
//! breaking change across every deployed relay.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod message;
mod wire;

pub use errors::CodecError;
pub use message::{message_hash, CrossChainMessage};
pub use wire::{decode, encode, MAX_STRING_LEN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

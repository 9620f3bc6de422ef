//! # SwineTrace Dispatch
//!
//! Source-side relay of lifecycle events: quote the relay fee, build and
//! sign a transaction carrying the canonical message, submit it to the
//! outbound gateway, and wait for inclusion. A batch layer sequences
//! multiple dispatches against one sending account.
//!
//! ## Module Structure
//!
//! ```text
//! st-dispatch/
//! ├── domain/          # DispatchRequest, DispatchReceipt, errors
//! ├── ports/           # DispatchApi, LedgerClient, FeeOracle
//! ├── adapters/        # Mock ledger, on-chain fee oracle
//! └── application/     # DispatchClient, BatchDispatcher, nonce allocator
//! ```
//!
//! ## Failure Semantics
//!
//! | Class | Behavior |
//! |-------|----------|
//! | Transient network | Retried with exponential backoff, bounded attempts |
//! | Insufficient funds | Fail fast before submission, surfaced to operator |
//! | Receipt timeout | Unknown outcome; caller re-queries before retrying |
//! | Batch item failure | Captured per item; the batch continues |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{MockLedgerClient, OnChainFeeOracle, StaticFeeOracle};
pub use application::service::{frame_gateway_call, parse_gateway_call};
pub use application::{BatchDispatcher, DispatchClient, NonceAllocator};
pub use config::DispatchConfig;
pub use domain::{
    BatchItem, BatchItemOutcome, BatchOutcome, Destination, DispatchError, DispatchReceipt,
    DispatchRequest,
};
pub use ports::{DispatchApi, FeeOracle, LedgerClient, LedgerError, OracleError, TxReceipt, TxRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # Dispatch Ports
//!
//! Inbound: what callers can ask of the dispatch subsystem.
//! Outbound: the ledger and fee-oracle collaborators it depends on.

pub mod inbound;
pub mod outbound;

pub use inbound::DispatchApi;
pub use outbound::{FeeOracle, LedgerClient, LedgerError, OracleError, TxReceipt, TxRequest};

//! # Dispatch Adapters
//!
//! Concrete implementations of the outbound ports: a mock ledger for tests
//! and local runs, and fee oracles.

pub mod fee_oracle;
pub mod mock_ledger;

pub use fee_oracle::{OnChainFeeOracle, StaticFeeOracle};
pub use mock_ledger::MockLedgerClient;

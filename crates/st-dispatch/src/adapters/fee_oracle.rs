//! # Fee Oracles
//!
//! The production path quotes relay fees from an on-chain gas-payment
//! oracle; [`StaticFeeOracle`] serves tests and environments without one.

use crate::ports::outbound::{FeeOracle, LedgerClient, LedgerError, OracleError};
use async_trait::async_trait;
use shared_types::{Address, DomainId, U256};
use std::sync::Arc;
use tracing::debug;

/// Oracle backed by a read-only contract call.
///
/// Request encoding: `domain (4, BE) || gas_estimate (8, BE)`.
/// Response: 32-byte big-endian fee.
pub struct OnChainFeeOracle<L> {
    ledger: Arc<L>,
    oracle_address: Address,
}

impl<L: LedgerClient> OnChainFeeOracle<L> {
    /// Create an oracle bound to a contract address.
    pub fn new(ledger: Arc<L>, oracle_address: Address) -> Self {
        Self {
            ledger,
            oracle_address,
        }
    }
}

#[async_trait]
impl<L: LedgerClient> FeeOracle for OnChainFeeOracle<L> {
    async fn quote_gas_payment(
        &self,
        destination: DomainId,
        gas_estimate: u64,
    ) -> Result<U256, OracleError> {
        let mut data = Vec::with_capacity(12);
        data.extend_from_slice(&destination.to_be_bytes());
        data.extend_from_slice(&gas_estimate.to_be_bytes());

        let response = self
            .ledger
            .call(self.oracle_address, &data)
            .await
            .map_err(|e| match e {
                LedgerError::Reverted(reason) => OracleError::Reverted(reason),
                other => OracleError::Unavailable(other.to_string()),
            })?;

        if response.len() != 32 {
            return Err(OracleError::Reverted(format!(
                "malformed quote: {} bytes",
                response.len()
            )));
        }
        let fee = U256::from_big_endian(&response);
        debug!(destination, gas_estimate, fee = %fee, "oracle quoted relay fee");
        Ok(fee)
    }
}

/// Fixed-fee oracle for tests and oracle-less deployments.
pub struct StaticFeeOracle {
    fee: U256,
    fail: bool,
}

impl StaticFeeOracle {
    /// Always quotes `fee`.
    pub fn new(fee: U256) -> Self {
        Self { fee, fail: false }
    }

    /// Always reports the oracle as missing, exercising the fallback path.
    pub fn failing() -> Self {
        Self {
            fee: U256::zero(),
            fail: true,
        }
    }
}

#[async_trait]
impl FeeOracle for StaticFeeOracle {
    async fn quote_gas_payment(
        &self,
        destination: DomainId,
        _gas_estimate: u64,
    ) -> Result<U256, OracleError> {
        if self.fail {
            return Err(OracleError::MissingOracle(destination));
        }
        Ok(self.fee)
    }
}

//! # Dispatch Configuration

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

/// Configuration for the dispatch client and batch dispatcher.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Account paying fees and gas.
    pub payer: Address,

    /// Outbound gateway contract on the source ledger.
    pub outbound_gateway: Address,

    /// Fixed minimum fee used when the fee oracle is unavailable.
    pub oracle_fallback_fee: U256,

    /// Gas limit used when estimation fails.
    pub default_gas_limit: u64,

    /// Safety multiplier applied to gas estimates, as a ratio.
    /// 13/10 gives the ~1.3x headroom for execution variance.
    pub gas_safety_num: u64,
    /// Denominator of the safety ratio.
    pub gas_safety_den: u64,

    /// Bounded submission attempts for transient failures.
    pub max_submit_attempts: u32,

    /// Base backoff between attempts, doubled each retry.
    pub backoff_base_ms: u64,

    /// Upper bound on the inclusion wait. Hitting it means the outcome is
    /// unknown, not that the transaction failed.
    pub receipt_timeout_secs: u64,

    /// Delay between batch items, reducing sequence contention.
    pub inter_item_delay_ms: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            payer: [0u8; 20],
            outbound_gateway: [0u8; 20],
            oracle_fallback_fee: U256::from(1_000_000_000_000_000u64), // 0.001 native
            default_gas_limit: 300_000,
            gas_safety_num: 13,
            gas_safety_den: 10,
            max_submit_attempts: 3,
            backoff_base_ms: 500,
            receipt_timeout_secs: 120,
            inter_item_delay_ms: 1000,
        }
    }
}

impl DispatchConfig {
    /// Config with near-zero delays for tests.
    pub fn for_testing() -> Self {
        Self {
            payer: [0xAA; 20],
            outbound_gateway: [0xBB; 20],
            backoff_base_ms: 1,
            inter_item_delay_ms: 1,
            ..Self::default()
        }
    }

    /// Gas limit after applying the safety ratio.
    pub fn padded_gas(&self, estimate: u64) -> u64 {
        estimate
            .saturating_mul(self.gas_safety_num)
            .checked_div(self.gas_safety_den)
            .unwrap_or(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DispatchConfig::default();
        assert_eq!(config.max_submit_attempts, 3);
        assert_eq!(config.padded_gas(100_000), 130_000);
    }

    #[test]
    fn test_padded_gas_rounds_down() {
        let config = DispatchConfig::default();
        assert_eq!(config.padded_gas(1), 1);
        assert_eq!(config.padded_gas(10), 13);
    }

    #[test]
    fn test_zero_denominator_falls_back() {
        let config = DispatchConfig {
            gas_safety_den: 0,
            ..DispatchConfig::default()
        };
        assert_eq!(config.padded_gas(100), 100);
    }
}

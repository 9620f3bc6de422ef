//! # Verifier Configuration

use crate::domain::errors::VerificationError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, DomainId, Hash};

/// Thirty days, the default freshness window.
pub const DEFAULT_FRESHNESS_WINDOW_SECS: u64 = 30 * 24 * 3600;

/// Configuration of the receiving side.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// The only caller allowed to deliver messages.
    pub gateway: Address,

    /// Domain id of the source ledger.
    pub origin_domain: DomainId,

    /// Contract identifier of the sender on the source ledger.
    pub origin_sender: Hash,

    /// Maximum accepted message age, seconds.
    pub freshness_window_secs: u64,
}

impl VerifierConfig {
    /// Validate the configuration. Zeroed gateway or sender means the
    /// deployment was never wired up; that is fatal at startup.
    pub fn validate(&self) -> Result<(), VerificationError> {
        if self.gateway == [0u8; 20] {
            return Err(VerificationError::Config(
                "gateway address is unset".to_string(),
            ));
        }
        if self.origin_sender == [0u8; 32] {
            return Err(VerificationError::Config(
                "origin sender is unset".to_string(),
            ));
        }
        if self.freshness_window_secs == 0 {
            return Err(VerificationError::Config(
                "freshness window must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Config for tests: fixed addresses, default window.
    pub fn for_testing() -> Self {
        Self {
            gateway: [0x64; 20],
            origin_domain: 1,
            origin_sender: [0x55; 32],
            freshness_window_secs: DEFAULT_FRESHNESS_WINDOW_SECS,
        }
    }
}

//! # Verification Invariants
//!
//! Pure origin and freshness checks. Each returns the specific rejection
//! for its step of the pipeline; none of them touches state.

use super::errors::VerificationError;
use shared_types::{Address, DomainId, Hash};

/// Only the registered gateway may deliver messages.
pub fn check_caller(caller: &Address, gateway: &Address) -> Result<(), VerificationError> {
    if caller != gateway {
        return Err(VerificationError::UnauthorizedCaller { caller: *caller });
    }
    Ok(())
}

/// The declared origin domain must be the configured source chain.
pub fn check_origin_domain(got: DomainId, expected: DomainId) -> Result<(), VerificationError> {
    if got != expected {
        return Err(VerificationError::InvalidOriginDomain { expected, got });
    }
    Ok(())
}

/// The declared sender must be the configured source contract.
pub fn check_origin_sender(got: &Hash, expected: &Hash) -> Result<(), VerificationError> {
    if got != expected {
        return Err(VerificationError::InvalidOriginSender { got: *got });
    }
    Ok(())
}

/// No future timestamps; no messages older than the freshness window.
pub fn check_freshness(
    timestamp: u64,
    now: u64,
    window_secs: u64,
) -> Result<(), VerificationError> {
    if timestamp > now {
        return Err(VerificationError::FutureTimestamp { timestamp, now });
    }
    let age_secs = now - timestamp;
    if age_secs > window_secs {
        return Err(VerificationError::MessageExpired {
            age_secs,
            max_age_secs: window_secs,
        });
    }
    Ok(())
}

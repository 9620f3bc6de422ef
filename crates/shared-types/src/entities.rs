//! # Core Domain Entities
//!
//! Primitive types shared between the dispatch side and the verifier side.

use serde::{Deserialize, Serialize};

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// A 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// Domain entity identifier (one per pig record).
pub type RecordId = u64;

/// Numeric identifier for a ledger/network within the cross-chain
/// messaging scheme.
pub type DomainId = u32;

/// Lifecycle actions a cross-chain message can carry.
///
/// The wire representation is the string tag, which keeps the enumeration
/// open to extension: an unrecognized tag decodes as [`LifecycleAction::Custom`]
/// instead of failing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleAction {
    /// A pig was registered on the source ledger.
    PigRegistered,
    /// A vaccination entry was appended to a pig record.
    VaccineAdded,
    /// A sale was recorded for a pig.
    SaleRecorded,
    /// A traceability QR code was issued for a pig.
    QrGenerated,
    /// Forward-compatible tag not known to this build.
    Custom(String),
}

impl LifecycleAction {
    /// Wire tag for this action.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::PigRegistered => "PIG_REGISTERED",
            Self::VaccineAdded => "VACCINE_ADDED",
            Self::SaleRecorded => "SALE_RECORDED",
            Self::QrGenerated => "QR_GENERATED",
            Self::Custom(tag) => tag,
        }
    }

    /// Parse a wire tag. Unknown tags are preserved as [`Self::Custom`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PIG_REGISTERED" => Self::PigRegistered,
            "VACCINE_ADDED" => Self::VaccineAdded,
            "SALE_RECORDED" => Self::SaleRecorded,
            "QR_GENERATED" => Self::QrGenerated,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl std::fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_tag_round_trip() {
        let actions = [
            LifecycleAction::PigRegistered,
            LifecycleAction::VaccineAdded,
            LifecycleAction::SaleRecorded,
            LifecycleAction::QrGenerated,
        ];
        for action in actions {
            assert_eq!(LifecycleAction::from_tag(action.as_tag()), action);
        }
    }

    #[test]
    fn test_unknown_tag_preserved() {
        let action = LifecycleAction::from_tag("WEIGH_IN");
        assert_eq!(action, LifecycleAction::Custom("WEIGH_IN".to_string()));
        assert_eq!(action.as_tag(), "WEIGH_IN");
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(LifecycleAction::SaleRecorded.to_string(), "SALE_RECORDED");
    }
}

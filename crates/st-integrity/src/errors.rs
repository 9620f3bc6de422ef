//! # Integrity Errors

use shared_types::BlobError;
use thiserror::Error;

/// Integrity engine error types.
#[derive(Debug, Error)]
pub enum IntegrityError {
    /// A root cannot be built over zero fields.
    #[error("Cannot build a Merkle root over an empty record")]
    EmptyRecord,

    /// One salt per field is required.
    #[error("Salt count mismatch: {fields} fields, {salts} salts")]
    SaltCountMismatch {
        /// Number of fields supplied.
        fields: usize,
        /// Number of salts supplied.
        salts: usize,
    },

    /// The salted bundle fetched from the blob store did not parse.
    #[error("Malformed salted bundle: {0}")]
    MalformedBundle(String),

    /// Blob store failure while fetching a bundle.
    #[error(transparent)]
    Blob(#[from] BlobError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_display() {
        let err = IntegrityError::SaltCountMismatch { fields: 4, salts: 3 };
        assert!(err.to_string().contains("4 fields"));
        assert!(err.to_string().contains("3 salts"));
    }
}

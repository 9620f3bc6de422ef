//! Registry error types.

use shared_types::RecordId;
use st_integrity::IntegrityError;
use thiserror::Error;

/// Errors produced by registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// An ear tag is already registered to a live record.
    #[error("ear tag already registered: {0}")]
    DuplicateTag(String),

    /// No record exists under the given id.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// Bundle publication or root computation failed.
    #[error("integrity failure: {0}")]
    Integrity(#[from] IntegrityError),
}

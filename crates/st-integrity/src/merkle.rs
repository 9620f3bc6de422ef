//! # Salted Merkle Tree
//!
//! Leaf `i` is `SHA-256(field_i || salt_i)`; parents are pairwise SHA-256
//! of adjacent nodes. An unpaired node at the end of a level is carried up
//! unchanged. Field order is fixed by the caller and must be identical on
//! build and verify.

use crate::errors::IntegrityError;
use crate::salt::Salt;
use sha2::{Digest, Sha256};
use shared_types::Hash;

/// Hash one salted field into a leaf.
pub fn leaf_hash(field: &[u8], salt: &Salt) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(field);
    hasher.update(salt);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Collapse one tree level. The single point where the odd-node carry
/// policy lives: an unpaired last node moves up as-is.
fn fold_level(level: &[Hash]) -> Vec<Hash> {
    let mut next = Vec::with_capacity(level.len().div_ceil(2));
    for chunk in level.chunks(2) {
        match chunk {
            [left, right] => next.push(hash_pair(left, right)),
            [lone] => next.push(*lone),
            _ => unreachable!("chunks(2) yields 1 or 2 elements"),
        }
    }
    next
}

/// Build the Merkle root over salted fields.
///
/// Requires at least one field and exactly one salt per field.
pub fn build_root(fields: &[Vec<u8>], salts: &[Salt]) -> Result<Hash, IntegrityError> {
    if fields.is_empty() {
        return Err(IntegrityError::EmptyRecord);
    }
    if fields.len() != salts.len() {
        return Err(IntegrityError::SaltCountMismatch {
            fields: fields.len(),
            salts: salts.len(),
        });
    }

    let mut level: Vec<Hash> = fields
        .iter()
        .zip(salts)
        .map(|(field, salt)| leaf_hash(field, salt))
        .collect();

    while level.len() > 1 {
        level = fold_level(&level);
    }

    Ok(level[0])
}

/// Recompute the root from scratch and compare against `expected`.
///
/// Pure and side-effect-free. The comparison covers all 32 bytes without
/// short-circuiting, so a mismatch does not leak which byte differed.
pub fn verify_root(
    fields: &[Vec<u8>],
    salts: &[Salt],
    expected: &Hash,
) -> Result<bool, IntegrityError> {
    let computed = build_root(fields, salts)?;
    Ok(ct_eq(&computed, expected))
}

/// Constant-time 32-byte equality.
fn ct_eq(a: &Hash, b: &Hash) -> bool {
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

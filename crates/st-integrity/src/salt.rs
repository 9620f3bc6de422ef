//! # Field Salts
//!
//! Each record field is salted independently before hashing so that a
//! published root reveals nothing about field values. Salts are drawn from
//! the OS RNG and never reused across fields or record versions.

use rand::rngs::OsRng;
use rand::RngCore;

/// A 32-byte per-field salt.
pub type Salt = [u8; 32];

/// Draw one fresh salt.
pub fn generate_salt() -> Salt {
    let mut salt = [0u8; 32];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Draw one fresh salt per field.
pub fn generate_salts(field_count: usize) -> Vec<Salt> {
    (0..field_count).map(|_| generate_salt()).collect()
}

//! # Clock Helper
//!
//! The single wall-clock read in the workspace. Services take explicit
//! `now: u64` parameters so tests control time; callers at the edge use
//! [`unix_now`] to supply it.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current Unix time in seconds.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Current Unix time in nanoseconds. Used for entropy seeding, not for
/// protocol timestamps.
pub fn unix_now_nanos() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
}

//! # SwineTrace Test Suite
//!
//! Unified test crate for flows that cross crate boundaries. Unit tests
//! live next to the code they exercise; this crate covers the seams:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── attestation_flow.rs   # registry → dispatch → verifier, end to end
//!     ├── batch_flow.rs         # sequential batch relay with partial failure
//!     └── content_flow.rs       # published bundles proved against event roots
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p st-tests
//! cargo test -p st-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;

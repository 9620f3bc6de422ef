//! # Dispatch Domain
//!
//! Entities and errors for the source-side dispatch flow.

pub mod entities;
pub mod errors;

pub use entities::{
    BatchItem, BatchItemOutcome, BatchOutcome, Destination, DispatchReceipt, DispatchRequest,
};
pub use errors::DispatchError;

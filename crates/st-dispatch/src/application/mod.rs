//! # Dispatch Application Services

pub mod batch;
pub mod nonce;
pub mod service;

pub use batch::BatchDispatcher;
pub use nonce::NonceAllocator;
pub use service::DispatchClient;

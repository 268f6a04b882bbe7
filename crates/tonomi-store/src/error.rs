//! Store error types.

use thiserror::Error;

/// Errors that can occur when persisting client state.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Storage is not available (private mode, no window, ...).
    #[error("Storage unavailable")]
    Unavailable,

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage backend rejected the operation.
    #[error("Storage operation failed: {0}")]
    Backend(String),

    /// Writing would exceed the storage quota.
    #[error("Storage quota exceeded writing {0}")]
    QuotaExceeded(String),

    /// Quantity outside the accepted range.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
}

//! Error types for the storefront.
//!
//! Ordinary misuse (an out-of-range index, a zero quantity) is not an
//! error here: those calls degrade to a no-op with a sentinel return.
//! The only failure worth a type is a persisted payload that no longer
//! parses, and even that is logged and recovered from rather than
//! surfaced to callers.

use thiserror::Error;

/// Failures around the persisted cart payload.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The stored value exists but is not a well-formed cart payload.
    #[error("malformed cart payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

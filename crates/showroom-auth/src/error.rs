//! Auth error types.

use thiserror::Error;

/// Errors that can occur in session handling.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The stored session has passed its expiry.
    #[error("Session expired")]
    SessionExpired,

    /// The backing store failed.
    #[error("Session store error: {0}")]
    Store(String),

    /// The stored session could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

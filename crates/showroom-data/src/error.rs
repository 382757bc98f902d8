//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur at the REST boundary.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// Non-2xx HTTP response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The response parsed but violated a domain invariant.
    #[error("Invalid response data: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

impl From<showroom_commerce::CommerceError> for FetchError {
    fn from(e: showroom_commerce::CommerceError) -> Self {
        FetchError::Invalid(e.to_string())
    }
}

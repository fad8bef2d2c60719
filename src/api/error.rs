//! Error taxonomy for the registration service client

use std::time::Duration;
use thiserror::Error;

/// Failure outcomes of one request/response exchange.
///
/// All three variants surface identically at the UI layer; the split
/// exists for logging and for tests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status code
    #[error("server returned {status} {reason}")]
    Http { status: u16, reason: String },

    /// The request never reached the server, or its body could not be read
    #[error("request failed: {0}")]
    Transport(String),

    /// Neither response nor transport error arrived within the bound
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

//! Error types for the request parser.

use thiserror::Error;

/// Errors that can occur while parsing a request.
#[derive(Debug, Error)]
pub enum Error {
    /// The request does not match `<method> /<path> HTTP/<d>.<d>`.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The status override in the path names a code with no registered
    /// reason phrase.
    #[error("Unknown status code: {0}")]
    UnknownStatus(u16),
}

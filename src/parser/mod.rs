//! Request parser module.
//!
//! This module recognizes the request-line shape
//! `<method> /<path> HTTP/<digits>.<digits>` and resolves the `?status=XXX`
//! override against the status code registry.

mod error;
mod request;
mod status;

// Re-export public items
pub use error::Error;
pub use request::ParsedRequest;
pub use status::StatusCode;

// Re-export the parse_request function
pub use request::parse_request;

//! Request parsing and representation.

use crate::parser::error::Error;
use crate::parser::status::StatusCode;

/// Represents a successfully parsed request.
///
/// The parser only pulls apart the request line; everything after the
/// protocol version is captured verbatim in `remainder` so the reflector can
/// echo it back byte-for-byte.
#[derive(Debug, Clone)]
pub struct ParsedRequest {
    /// The method token from the request line
    pub method: String,
    /// The request path, without the leading `/`. No percent-decoding is
    /// performed.
    pub path: String,
    /// Everything after the protocol version, unmodified
    pub remainder: String,
    /// The status code requested via the `?status=XXX` override, if any
    pub status_override: Option<StatusCode>,
}

/// Parse a request from a byte slice.
///
/// The recognized shape is `<method> /<path> HTTP/<digits>.<digits>` followed
/// by an arbitrary remainder. The method must be non-empty; the path may be
/// empty. A path of exactly `?status=XXX` (three ASCII digits) selects the
/// response status, provided the code exists in the registry — an unknown
/// code is a parse error, not a pass-through.
///
/// # Arguments
///
/// * `input` - A byte slice containing the request to parse
///
/// # Returns
///
/// The parsed request, or an error if the request is invalid
///
/// # Examples
///
/// ```
/// use reflecho::parser::parse_request;
///
/// let request = parse_request(b"GET /index.html HTTP/1.1\r\nHost: example.com").unwrap();
///
/// assert_eq!(request.method, "GET");
/// assert_eq!(request.path, "index.html");
/// assert_eq!(request.remainder, "\r\nHost: example.com");
/// assert!(request.status_override.is_none());
/// ```
pub fn parse_request(input: &[u8]) -> Result<ParsedRequest, Error> {
    // Convert the input to a string
    let text = match std::str::from_utf8(input) {
        Ok(s) => s,
        Err(_) => return Err(Error::MalformedRequest("invalid UTF-8".to_string())),
    };

    let malformed = || Error::MalformedRequest(first_line(text).to_string());

    // Split off the method token
    let (method, rest) = text.split_once(' ').ok_or_else(malformed)?;
    if method.is_empty() || method.contains(char::is_whitespace) {
        return Err(malformed());
    }

    // The path starts at a literal `/` and runs to the next space
    let rest = rest.strip_prefix('/').ok_or_else(malformed)?;
    let (path, rest) = rest.split_once(' ').ok_or_else(malformed)?;
    if path.contains(char::is_whitespace) {
        return Err(malformed());
    }

    // `HTTP/<digits>.<digits>`; everything after it is the remainder
    let remainder = strip_version(rest).ok_or_else(malformed)?;

    let status_override = status_override(path)?;

    Ok(ParsedRequest {
        method: method.to_string(),
        path: path.to_string(),
        remainder: remainder.to_string(),
        status_override,
    })
}

/// Strip a `HTTP/<digits>.<digits>` prefix, returning the rest of the input.
fn strip_version(s: &str) -> Option<&str> {
    let s = s.strip_prefix("HTTP/")?;
    let s = strip_digits(s)?;
    let s = s.strip_prefix('.')?;
    strip_digits(s)
}

/// Strip one or more leading ASCII digits.
fn strip_digits(s: &str) -> Option<&str> {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    Some(&s[end..])
}

/// Resolve the `?status=XXX` override against the status registry.
///
/// Only a path of exactly `?status=` plus three ASCII digits counts as an
/// override; any other path yields `None` and the caller falls back to the
/// default status. A matching override whose code is not in the registry is
/// an error.
fn status_override(path: &str) -> Result<Option<StatusCode>, Error> {
    let digits = match path.strip_prefix("?status=") {
        Some(digits) => digits,
        None => return Ok(None),
    };
    if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }

    let code = digits
        .bytes()
        .fold(0u16, |code, digit| code * 10 + u16::from(digit - b'0'));

    match StatusCode::from_u16(code) {
        Some(status) => Ok(Some(status)),
        None => Err(Error::UnknownStatus(code)),
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

//! Response types and serialization.

use crate::parser::{ParsedRequest, StatusCode};

/// Represents a response: a status line plus a body.
///
/// The status code and its reason phrase always agree because the phrase is
/// looked up from the code at serialization time; there is no way to build
/// a mismatched pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The status code
    pub status: StatusCode,
    /// The response body
    pub body: String,
}

impl HttpResponse {
    /// Build the reflection response for a parsed request.
    ///
    /// The body is the literal text `Method: <method><remainder>` — the
    /// method token concatenated with the captured trailing text, with no
    /// re-formatting. The status is the override from the path, or `200 OK`.
    pub fn reflect(request: &ParsedRequest) -> Self {
        Self {
            status: request.status_override.unwrap_or(StatusCode::Ok),
            body: format!(
                "Method: {method}{remainder}",
                method = request.method,
                remainder = request.remainder
            ),
        }
    }

    /// The fixed response for any parse failure: `400 Bad Request`, empty
    /// body. The diagnostic goes to the log, not onto the wire.
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BadRequest,
            body: String::new(),
        }
    }

    /// Serialize the response to bytes.
    ///
    /// The wire format is `HTTP/1.1 <code> <phrase>\n<body>`. This is a
    /// simplified echo format, not conformant HTTP/1.1: the line break is a
    /// bare `\n`, and there are no headers and no `\r\n\r\n` terminator.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "HTTP/1.1 {code} {phrase}\n{body}",
            code = self.status as u16,
            phrase = self.status.reason_phrase(),
            body = self.body
        )
        .into_bytes()
    }
}

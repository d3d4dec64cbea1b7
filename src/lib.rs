//! A minimal single-connection reflector server.
//!
//! This library implements a small request/response listener for teaching
//! and demos. It accepts one raw-byte request per TCP connection, parses a
//! line-oriented format resembling HTTP/1.1, and answers with a synthesized
//! response reflecting the request's fields. It is deliberately not a
//! conformant HTTP server.
//!
//! # Features
//!
//! - Parse the request line `<method> /<path> HTTP/<d>.<d>` from a byte slice
//! - `?status=XXX` override: the client picks the response status code
//! - Full standard status registry, so code and reason phrase always agree
//! - Fixed `400 Bad Request` fallback for anything that does not parse
//! - Two handler strategies selected at construction: a parsing reflector
//!   and a raw byte-echo diagnostic mode
//! - Strictly sequential accept loop: one connection at a time, one request
//!   per connection
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use reflecho::parse_request;
//!
//! let request_bytes = b"GET /?status=404 HTTP/1.1\r\nHost: example.com";
//!
//! match parse_request(request_bytes) {
//!     Ok(request) => {
//!         println!("Method: {}", request.method);
//!         println!("Path: {}", request.path);
//!         println!("Override: {:?}", request.status_override);
//!     }
//!     Err(err) => {
//!         println!("Error parsing request: {}", err);
//!     }
//! }
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use reflecho::{HttpServer, Reflector, ServerConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), reflecho::ServerError> {
//!     let config = ServerConfig::default();
//!     let handler = Reflector::new(config.read_buffer_size);
//!     HttpServer::new(config, handler).run().await
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request, Error as ParserError, ParsedRequest, StatusCode};
pub use server::{
    ConnectionHandler, Error as ServerError, HttpResponse, HttpServer, RawEcho, Reflector,
    ServerConfig,
};

//! Server module.
//!
//! This module provides the listening endpoint, the sequential accept loop,
//! and the two connection handler strategies.

mod config;
mod error;
mod handler;
mod http_server;
mod response;
mod tests;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use handler::{ConnectionHandler, RawEcho, Reflector};
pub use http_server::HttpServer;
pub use response::HttpResponse;

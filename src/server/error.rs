//! Error types for the server.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that can occur during server operation.
///
/// Parse failures are deliberately absent: they are recovered inside the
/// reflector handler, which answers with a fixed `400 Bad Request` instead
/// of propagating an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The listening address could not be bound (already in use, permission
    /// denied). Fatal: there is no server without the endpoint.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// I/O error on a socket.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

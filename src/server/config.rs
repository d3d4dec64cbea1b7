//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The read buffer size. The reflector reads at most this many bytes
    /// from a connection, in a single call.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 4890)),
            read_buffer_size: 1024,
        }
    }
}

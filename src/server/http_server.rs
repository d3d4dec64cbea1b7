//! The server: a bound listening endpoint plus the accept loop.

use log::{error, info};
use tokio::net::TcpListener;
use tokio::signal;

use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::ConnectionHandler;

/// A single-connection-at-a-time server.
///
/// The server is generic over its [`ConnectionHandler`]; the handler is
/// chosen at construction and every accepted connection goes through it.
pub struct HttpServer<H> {
    /// The server configuration.
    pub config: ServerConfig,
    handler: H,
}

impl<H: ConnectionHandler> HttpServer<H> {
    /// Create a new server with the given configuration and handler.
    pub fn new(config: ServerConfig, handler: H) -> Self {
        Self { config, handler }
    }

    /// Bind the listening endpoint.
    ///
    /// Fails with [`Error::Bind`] if the address is already in use or cannot
    /// be bound. At most one listener can hold a given address; a second
    /// bind fails without affecting the first.
    pub async fn bind(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(self.config.addr)
            .await
            .map_err(|source| Error::Bind {
                addr: self.config.addr,
                source,
            })?;
        info!("Run on {addr}", addr = listener.local_addr()?);
        Ok(listener)
    }

    /// Bind and serve until interrupted.
    ///
    /// The listener lives in this scope, so it is closed on every exit path:
    /// operator interrupt, fatal accept error, or bind failure.
    pub async fn run(&self) -> Result<(), Error> {
        let listener = self.bind().await?;
        self.serve(&listener).await
    }

    /// The accept loop.
    ///
    /// Strictly sequential: each connection is read, answered, and closed
    /// before the next `accept()`. Per-connection I/O failures are logged
    /// with the peer address and abandoned; they never tear the listener
    /// down. Accept failures are OS-level and fatal, and propagate out.
    pub async fn serve(&self, listener: &TcpListener) -> Result<(), Error> {
        let ctrl_c = signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    info!("Stop");
                    return Ok(());
                }

                accepted = listener.accept() => {
                    let (mut socket, peer) = accepted?;
                    info!("Request from: {peer}");

                    if let Err(err) = self.handler.handle(&mut socket, peer).await {
                        error!("Client {peer} error: {err}");
                    }
                    info!("Client {peer} disconnect");
                    // The socket drops here, closing the connection.
                }
            }
        }
    }
}
